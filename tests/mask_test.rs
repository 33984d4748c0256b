use wikicoord::mask::mask_regions;

#[test]
fn test_text_without_regions_is_unchanged() {
    let text = "plain {{coord|1|2}} text";
    assert_eq!(mask_regions(text), text);
}

#[test]
fn test_comment_is_blanked() {
    let masked = mask_regions("a <!-- {{coord|1|2}} --> b");
    assert!(!masked.contains("coord"));
    assert!(masked.starts_with("a "));
    assert!(masked.ends_with(" b"));
}

#[test]
fn test_nowiki_tags_are_case_insensitive() {
    let masked = mask_regions("<NoWiki>{{coord|1|2}}</NOWIKI>");
    assert!(!masked.contains("coord"));
}

#[test]
fn test_multiline_regions() {
    let masked = mask_regions("x<!--\n{{coord|1|2}}\n-->y<nowiki>\n{{coord|3|4}}\n</nowiki>z");
    assert!(!masked.contains("coord"));
    assert!(masked.starts_with('x'));
    assert!(masked.ends_with('z'));
}

#[test]
fn test_length_is_preserved() {
    let text = "héllo <!-- ünïcode --> wörld <nowiki>ß</nowiki>!";
    let masked = mask_regions(text);
    assert_eq!(masked.len(), text.len());
    assert_eq!(masked.find("wörld"), text.find("wörld"));
}

#[test]
fn test_unterminated_regions_mask_to_end() {
    let masked = mask_regions("keep <!-- {{coord|1|2}}");
    assert_eq!(masked.trim_end(), "keep");

    let masked = mask_regions("keep <nowiki> {{coord|1|2}}");
    assert_eq!(masked.trim_end(), "keep");
}

#[test]
fn test_region_ends_at_first_closer() {
    let masked = mask_regions("<!-- a --> {{coord|1|2}} <!-- b -->");
    assert_eq!(masked.trim(), "{{coord|1|2}}");
}

#[test]
fn test_comment_inside_nowiki_is_part_of_nowiki() {
    let masked = mask_regions("<nowiki><!--</nowiki>{{coord|1|2}}-->");
    assert!(masked.contains("{{coord|1|2}}"));
}
