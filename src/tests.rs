use super::*;

fn default_separators() -> Separators {
    Config::default()
        .separators()
        .expect("Default separators should compile")
}

fn positions(documents: &[Document]) -> Vec<(usize, usize)> {
    documents
        .iter()
        .map(|doc| (doc.chapter_index, doc.slide_index))
        .collect()
}

#[test]
fn test_chapters_and_slides_in_split_order() {
    let text = "s1\n\n\ns2\n\n\n\nc2s1\n\n\nc2s2";
    let documents = extract_documents("deck", text, &default_separators());

    assert_eq!(positions(&documents), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

    let contents: Vec<&str> = documents.iter().map(|doc| doc.content.as_str()).collect();
    assert_eq!(contents, vec!["s1\n", "s2\n", "c2s1\n", "c2s2"]);
}

#[test]
fn test_ids_are_contiguous_across_chapters() {
    let text = "a\n\n\nb\n\n\n\nc\n\n\n\nd\n\n\ne\n\n\nf";
    let documents = extract_documents("deck", text, &default_separators());

    let ids: Vec<&str> = documents.iter().map(|doc| doc.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["deck_1", "deck_2", "deck_3", "deck_4", "deck_5", "deck_6"]
    );
}

#[test]
fn test_id_with_empty_prefix() {
    let documents = extract_documents("", "only slide", &default_separators());
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, "_1");
    assert_eq!(documents[0].url, "/#/0/0");
}

#[test]
fn test_chapter_title_carries_forward() {
    let text = "# A\n\n\n\nx\n\n\n\ny";
    let documents = extract_documents("", text, &default_separators());

    assert_eq!(documents.len(), 3);
    for doc in &documents {
        assert_eq!(doc.chapter_title, "A");
    }
}

#[test]
fn test_chapter_title_is_overwritten_by_next_heading() {
    let text = "# A\n\n\n\nbody1\n\n\n\n# B\n\n\n\nbody2";
    let documents = extract_documents("", text, &default_separators());

    let titles: Vec<&str> = documents
        .iter()
        .map(|doc| doc.chapter_title.as_str())
        .collect();
    assert_eq!(titles, vec!["A", "A", "B", "B"]);
}

#[test]
fn test_empty_heading_still_overwrites_title() {
    let text = "# A\n\n\n\n# \nx";
    let documents = extract_documents("", text, &default_separators());

    assert_eq!(documents[0].chapter_title, "A");
    assert_eq!(documents[1].chapter_title, "");
}

#[test]
fn test_title_applies_to_every_slide_of_chapter() {
    let text = "intro\n\n\n# Late heading\nbody";
    let documents = extract_documents("", text, &default_separators());

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].chapter_title, "Late heading");
    assert_eq!(documents[1].chapter_title, "Late heading");
}

#[test]
fn test_image_is_captured_verbatim() {
    let documents = extract_documents(
        "",
        "intro []( /img/cat.png ) more",
        &default_separators(),
    );
    assert_eq!(documents[0].image, " /img/cat.png ");
}

#[test]
fn test_image_does_not_leak_between_slides() {
    let text = "[](first.png)\n\n\nno picture";
    let documents = extract_documents("", text, &default_separators());

    assert_eq!(documents[0].image, "first.png");
    assert_eq!(documents[1].image, "");
}

#[test]
fn test_keywords_first_strong_then_first_italic() {
    let documents = extract_documents(
        "",
        "**bold** and *italic* and **ignored second bold**",
        &default_separators(),
    );
    assert_eq!(documents[0].keywords, vec!["bold", "italic"]);
}

#[test]
fn test_keywords_strong_listed_before_italic() {
    let documents = extract_documents(
        "",
        "*first italic* then **later bold**",
        &default_separators(),
    );
    assert_eq!(documents[0].keywords, vec!["later bold", "first italic"]);
}

#[test]
fn test_keywords_empty_without_emphasis() {
    let documents = extract_documents("", "plain text", &default_separators());
    assert!(documents[0].keywords.is_empty());
}

#[test]
fn test_empty_input_yields_single_document() {
    let documents = extract_documents("deck", "", &default_separators());

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].chapter_index, 0);
    assert_eq!(documents[0].slide_index, 0);
    assert_eq!(documents[0].content, "");
    assert_eq!(documents[0].chapter_title, "");
    assert_eq!(documents[0].image, "");
}

#[test]
fn test_content_is_not_trimmed() {
    let text = "  padded slide  \n";
    let documents = extract_documents("", text, &default_separators());
    assert_eq!(documents[0].content, text);
}

#[test]
fn test_extraction_is_deterministic() {
    let text = "# T\n**k** *i*\n\n\n[](x.png)\n\n\n\nnext";
    let separators = default_separators();

    let first = extract_documents("deck", text, &separators);
    let second = extract_documents("deck", text, &separators);
    assert_eq!(first, second);
}

#[test]
fn test_url_from_indices() {
    assert_eq!(extract::slide_url("deck1", 2, 5), "/deck1/#/2/5");
    assert_eq!(extract::slide_url("", 2, 5), "/#/2/5");
}

#[test]
fn test_injected_patterns_are_used_unchanged() {
    // Without multi-line mode `^` only anchors at the start of the text
    let separators = Separators::from_regex(
        regex::Regex::new("^---\n").unwrap(),
        regex::Regex::new("^--\n").unwrap(),
    );
    let documents = extract_documents("", "a\n---\nb", &separators);
    assert_eq!(documents.len(), 1);

    let documents = extract_documents("", "---\nb", &separators);
    assert_eq!(positions(&documents), vec![(0, 0), (1, 0)]);
    assert_eq!(documents[1].content, "b");
}

#[test]
fn test_custom_separators_run_multiline() {
    let separators = Separators::new("^---$", "^--$").expect("Separators should compile");
    let text = "one\n--\ntwo\n---\nthree";
    let documents = extract_documents("", text, &separators);

    assert_eq!(positions(&documents), vec![(0, 0), (0, 1), (1, 0)]);
    assert_eq!(documents[2].content, "\nthree");
}

#[test]
fn test_document_json_field_names() {
    let documents = extract_documents("deck", "# T\nbody", &default_separators());
    let value = serde_json::to_value(&documents[0]).expect("Document should serialize");
    let object = value.as_object().expect("Document should be a JSON object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["chapter", "content", "h", "img", "keywords", "objectID", "url", "v"]
    );
    assert_eq!(object["objectID"], "deck_1");
    assert_eq!(object["chapter"], "T");
    assert_eq!(object["h"], 0);
}

#[test]
fn test_batch_requests_chunk_in_order() {
    let text = "1\n\n\n2\n\n\n3\n\n\n4\n\n\n5";
    let documents = extract_documents("deck", text, &default_separators());
    assert_eq!(documents.len(), 5);

    let batches = batch_requests(&documents, 2);
    let sizes: Vec<usize> = batches.iter().map(|b| b.requests.len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);
    assert!(batches
        .iter()
        .flat_map(|b| &b.requests)
        .all(|action| action.action == "addObject"));
    assert_eq!(batches[2].requests[0].body.id, "deck_5");

    let json = serde_json::to_value(&batches[0]).expect("Batch should serialize");
    assert_eq!(json["requests"][0]["action"], "addObject");
    assert_eq!(json["requests"][1]["body"]["objectID"], "deck_2");
}

#[test]
fn test_batch_size_zero_is_one() {
    let documents = extract_documents("", "a\n\n\nb", &default_separators());
    assert_eq!(batch_requests(&documents, 0).len(), 2);
    assert!(batch_requests(&[], 10).is_empty());
}
