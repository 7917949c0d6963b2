// tests/letter_pages.rs
//
// Letter page → word -> entry id.
//
use skarnik_scrape::specs::letter;

#[test]
fn single_anchor_yields_word_and_id() {
    let words = letter::parse(r#"<a href="http://www.skarnik.by/rusbel/123">Слово</a>"#);
    assert_eq!(words.len(), 1);
    assert_eq!(words.get("Слово"), Some(&123));
}

#[test]
fn anchors_without_href_or_trailing_id_are_skipped() {
    let doc = r#"
        <a>Без спасылкі</a>
        <a name="x">Імя</a>
        <a href="http://www.skarnik.by/bukva/a">Літара</a>
        <a href="http://www.skarnik.by/rusbel/12/">Слэш</a>
        <a href="http://www.skarnik.by/rusbel/12?x=1">Запыт</a>
        <a href="http://www.skarnik.by/rusbel/7">Сем</a>"#;
    let words = letter::parse(doc);
    assert_eq!(words.keys().collect::<Vec<_>>(), ["Сем"]);
}

#[test]
fn whitespace_only_text_is_not_a_word() {
    let doc = "<a href=\"/rusbel/1\">   \n\t </a><a href=\"/rusbel/2\">&nbsp;</a>";
    assert!(letter::parse(doc).is_empty());
}

#[test]
fn word_is_trimmed_first_text_inside_anchor() {
    let doc = r#"<a href="/belrus/5">
            <b> вада </b> <i>ж.</i>
        </a>"#;
    let words = letter::parse(doc);
    assert_eq!(words.len(), 1);
    assert_eq!(words.get("вада"), Some(&5));
}

#[test]
fn text_after_anchor_closes_is_not_captured() {
    // Empty anchor; the following text must not be attributed to id 9.
    let doc = r#"<p><a href="/belrus/9"></a> хвост <a href="/belrus/10">дом</a></p>"#;
    let words = letter::parse(doc);
    assert_eq!(words.len(), 1);
    assert_eq!(words.get("дом"), Some(&10));
}

#[test]
fn later_anchor_wins_for_duplicate_word_on_one_page() {
    let doc = r#"<a href="/tsbm/1">стол</a><a href="/tsbm/2">стол</a><a href="/tsbm/3">крэсла</a>"#;
    let words = letter::parse(doc);
    assert_eq!(words.get("стол"), Some(&2));
    assert_eq!(words.keys().collect::<Vec<_>>(), ["стол", "крэсла"]);
}

#[test]
fn case_is_preserved_and_distinct() {
    let doc = r#"<a href="/rusbel/1">Мир</a><a href="/rusbel/2">мир</a>"#;
    let words = letter::parse(doc);
    assert_eq!(words.get("Мир"), Some(&1));
    assert_eq!(words.get("мир"), Some(&2));
}

#[test]
fn entities_are_decoded() {
    let words = letter::parse(r#"<a href="/rusbel/4">д&#39;Артаньян</a>"#);
    assert_eq!(words.get("д'Артаньян"), Some(&4));
}

#[test]
fn deeply_nested_listing_still_yields_its_words() {
    let depth = 5_000;
    let doc = format!(
        r#"{}<a href="/rusbel/1">слова</a>{}"#,
        "<span>".repeat(depth),
        "</span>".repeat(depth)
    );
    let words = letter::parse(&doc);
    assert_eq!(words.get("слова"), Some(&1));
}
