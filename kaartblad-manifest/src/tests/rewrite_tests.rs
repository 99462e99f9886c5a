use super::*;
use serde_json::json;

fn dict(pairs: &[(&str, &str)]) -> Dictionary {
    pairs.iter().copied().collect()
}

fn sample_manifest() -> Value {
    json!({
        "label": { "en": ["Waterstaatskaart van Nederland. Eerste editie."] },
        "items": [
            {
                "label": { "none": ["023.B.R"] },
                "metadata": [
                    { "label": { "en": ["bw"] }, "value": { "en": ["1872"] } },
                    { "label": { "en": ["ba"] }, "value": { "en": [null] } }
                ],
                "width": 8000,
                "hidden": false
            }
        ]
    })
}

#[test]
fn whole_string_replacement() {
    let pass = RewritePass::new(RewriteMode::WholeString, dict(&[("bw", "bewerkt")]));
    assert_eq!(pass.apply(&json!("bw")), json!("bewerkt"));
    assert_eq!(pass.apply(&json!("bw.1")), json!("bw.1"));
    assert_eq!(pass.apply(&json!(42)), json!(42));
}

#[test]
fn segment_replacement() {
    let pass = RewritePass::new(
        RewriteMode::dotted_segments(),
        dict(&[("B", "back"), ("R", "right")]),
    );
    assert_eq!(pass.apply(&json!("023.B.R")), json!("023.back.right"));
    assert_eq!(pass.apply(&json!("023.W")), json!("023.W"));
    assert_eq!(pass.apply(&json!("B")), json!("B"));
}

#[test]
fn empty_segments_preserved() {
    let pass = RewritePass::new(RewriteMode::dotted_segments(), dict(&[("B", "back")]));
    assert_eq!(pass.apply(&json!("12..B.")), json!("12..back."));
}

#[test]
fn protected_prefix_never_altered() {
    let pass = RewritePass::new(
        RewriteMode::dotted_segments(),
        dict(&[
            ("Waterstaatskaart van Nederland", "x"),
            (" Eerste editie", "y"),
            ("", "z"),
        ]),
    );
    let title = "Waterstaatskaart van Nederland. Eerste editie.";
    assert_eq!(pass.apply(&json!(title)), json!(title));
}

#[test]
fn segment_mode_without_protection() {
    let mode = RewriteMode::Segments {
        delimiter: '.',
        protected_prefix: None,
    };
    assert_eq!(
        mode.rewrite_str("Waterstaatskaart van Nederland.B", &dict(&[("B", "back")])),
        Some("Waterstaatskaart van Nederland.back".to_string())
    );
}

#[test]
fn nested_structure_rewritten_in_place() {
    let rewriter = LabelRewriter::standard(
        dict(&[("bw", "bewerkt"), ("ba", "basis")]),
        dict(&[("B", "back"), ("R", "right")]),
        Some(PROTECTED_PREFIX.to_string()),
    );
    let out = rewriter.apply(&sample_manifest());
    assert_eq!(out["items"][0]["label"]["none"][0], json!("023.back.right"));
    assert_eq!(out["items"][0]["metadata"][0]["label"]["en"][0], json!("bewerkt"));
    assert_eq!(out["items"][0]["metadata"][1]["label"]["en"][0], json!("basis"));
    assert_eq!(out["items"][0]["metadata"][1]["value"]["en"][0], Value::Null);
    assert_eq!(out["items"][0]["width"], json!(8000));
    assert_eq!(out["items"][0]["hidden"], json!(false));
    assert_eq!(out["label"], sample_manifest()["label"]);
}

#[test]
fn keys_are_never_rewritten() {
    let pass = RewritePass::new(RewriteMode::WholeString, dict(&[("bw", "bewerkt")]));
    let out = pass.apply(&json!({ "bw": "bw" }));
    assert_eq!(out, json!({ "bw": "bewerkt" }));
}

#[test]
fn empty_dictionaries_round_trip() {
    let rewriter = LabelRewriter::standard(Dictionary::new(), Dictionary::new(), None);
    let doc = sample_manifest();
    assert_eq!(rewriter.apply(&doc), doc);
}

#[test]
fn no_passes_is_identity() {
    let doc = sample_manifest();
    assert_eq!(LabelRewriter::new().apply(&doc), doc);
}

#[test]
fn whole_string_pass_is_idempotent() {
    let pass = RewritePass::new(RewriteMode::WholeString, dictionary::label_replacements());
    let doc = json!(["bw", "vk", "hz", "bij", "gbij", "ui", "ba", "other", { "k": ["bw"] }]);
    let once = pass.apply(&doc);
    assert_eq!(pass.apply(&once), once);
}

#[test]
fn default_rewriter_runs_both_passes_in_order() {
    let rewriter = default_rewriter();
    assert_eq!(rewriter.passes().len(), 2);
    assert_eq!(rewriter.passes()[0].mode, RewriteMode::WholeString);
    let out = rewriter.apply(&json!(["vk", "12.W.dup", "ui.B"]));
    assert_eq!(out, json!(["verkend", "12.W.duplicate", "ui.back"]));
}
