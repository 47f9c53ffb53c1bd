use kobo_source::{Highlight, UNKNOWN_AUTHOR};

pub(crate) fn highlight(id: i64, text: &str) -> Highlight {
    Highlight {
        id,
        volume_id: "Herbert/Dune.epub".to_string(),
        text: text.to_string(),
        content_id: "Herbert/Dune.epub#(1)OEBPS/chapter01.xhtml".to_string(),
        book_title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        date_created: format!("2023-01-0{id} 12:00:00"),
    }
}

pub(crate) fn sample() -> Vec<Highlight> {
    vec![
        highlight(1, "Fear is the mind-killer."),
        highlight(2, "I must not fear.\nFear is the little-death."),
        Highlight {
            author: UNKNOWN_AUTHOR.to_string(),
            book_title: "Mémoires, «tome I»".to_string(),
            volume_id: "0f8c4b02-8f6e-4f5b-9d36-0a5e3b9d2c11".to_string(),
            ..highlight(3, "Le cœur a ses raisons, \"dit-il\".")
        },
    ]
}
