use super::*;

fn image_file() -> SelectedFile {
    SelectedFile {
        name: "bracket.png".to_owned(),
        mime: "image/png".to_owned(),
        size: 2048.0,
    }
}

fn pdf_file() -> SelectedFile {
    SelectedFile {
        name: "assembly.pdf".to_owned(),
        mime: "application/pdf".to_owned(),
        size: 4096.0,
    }
}

fn text_file() -> SelectedFile {
    SelectedFile {
        name: "notes.txt".to_owned(),
        mime: "text/plain".to_owned(),
        size: 128.0,
    }
}

fn sample_result() -> AnalysisResult {
    serde_json::from_value(serde_json::json!({
        "calculated_weight_kg": 12.5,
        "extracted_data": {"material": "steel", "outer_diameter": 42}
    }))
    .expect("sample result")
}

// =============================================================
// MIME filtering
// =============================================================

#[test]
fn supported_mime_types() {
    assert!(is_supported_mime("image/png"));
    assert!(is_supported_mime("image/jpeg"));
    assert!(is_supported_mime("image/svg+xml"));
    assert!(is_supported_mime("application/pdf"));
}

#[test]
fn unsupported_mime_types() {
    assert!(!is_supported_mime("text/plain"));
    assert!(!is_supported_mime("application/zip"));
    assert!(!is_supported_mime(""));
}

#[test]
fn unsupported_selection_leaves_state_unchanged() {
    let mut state = UploadState::default();
    assert!(!state.select(text_file(), || Some("blob:preview".to_owned())));
    assert_eq!(state, UploadState::default());
}

#[test]
fn unsupported_selection_preserves_existing_selection() {
    let mut state = UploadState::default();
    assert!(state.select(image_file(), || Some("blob:preview".to_owned())));
    let before = state.clone();
    assert!(!state.select(text_file(), || Some("blob:other".to_owned())));
    assert_eq!(state, before);
}

// =============================================================
// Selection and previews
// =============================================================

#[test]
fn image_selection_produces_preview() {
    let mut state = UploadState::default();
    assert!(state.select(image_file(), || Some("blob:preview".to_owned())));
    assert_eq!(state.preview.as_deref(), Some("blob:preview"));
    assert_eq!(state.file.as_ref().map(|f| f.name.as_str()), Some("bracket.png"));
}

#[test]
fn pdf_selection_never_produces_preview() {
    let mut state = UploadState::default();
    assert!(state.select(pdf_file(), || Some("blob:preview".to_owned())));
    assert!(state.preview.is_none());
    assert!(state.file.is_some());
}

#[test]
fn new_selection_discards_previous_result() {
    let mut state = UploadState::default();
    state.select(image_file(), || Some("blob:one".to_owned()));
    assert!(state.begin());
    state.finish(sample_result());
    state.set_copied(true);

    assert!(state.select(pdf_file(), || None));
    assert!(state.result.is_none());
    assert!(state.error.is_none());
    assert!(state.text.is_empty());
    assert!(!state.copied);
}

// =============================================================
// Extract lifecycle
// =============================================================

#[test]
fn begin_requires_a_file() {
    let mut state = UploadState::default();
    assert!(!state.begin());
    assert!(!state.processing);
}

#[test]
fn begin_refuses_while_processing() {
    let mut state = UploadState::default();
    state.select(image_file(), || None);
    assert!(state.begin());
    assert!(!state.begin());
    assert!(state.processing);
}

#[test]
fn begin_clears_prior_error_and_result() {
    let mut state = UploadState::default();
    state.select(image_file(), || None);
    state.begin();
    state.fail("workflow unreachable".to_owned());
    assert!(state.begin());
    assert!(state.error.is_none());
    assert!(state.result.is_none());
}

#[test]
fn finish_records_result_and_display_text() {
    let mut state = UploadState::default();
    state.select(image_file(), || None);
    state.begin();
    let result = sample_result();
    let expected = result.display_text();
    state.finish(result);
    assert!(!state.processing);
    assert_eq!(state.text, expected);
    assert!(state.result.is_some());
}

#[test]
fn fail_keeps_file_selected_for_retry() {
    let mut state = UploadState::default();
    state.select(image_file(), || None);
    state.begin();
    state.fail("workflow unreachable".to_owned());
    assert!(!state.processing);
    assert_eq!(state.error.as_deref(), Some("workflow unreachable"));
    assert!(state.file.is_some());
    assert!(state.can_extract());
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_from_selected_resets_everything() {
    let mut state = UploadState::default();
    state.select(image_file(), || Some("blob:preview".to_owned()));
    state.clear();
    assert_eq!(state, UploadState::default());
}

#[test]
fn clear_from_result_resets_everything() {
    let mut state = UploadState::default();
    state.select(image_file(), || Some("blob:preview".to_owned()));
    state.begin();
    state.finish(sample_result());
    state.set_copied(true);
    state.clear();
    assert_eq!(state, UploadState::default());
}

#[test]
fn clear_is_refused_mid_flight() {
    let mut state = UploadState::default();
    state.select(image_file(), || None);
    state.begin();
    state.clear();
    assert!(state.processing);
    assert!(state.file.is_some());
}

#[test]
fn clear_from_error_resets_everything() {
    let mut state = UploadState::default();
    state.select(pdf_file(), || None);
    state.begin();
    state.fail("boom".to_owned());
    state.clear();
    assert_eq!(state, UploadState::default());
}

// =============================================================
// Field rendering
// =============================================================

#[test]
fn field_display_renders_null_as_na() {
    assert_eq!(field_display(&serde_json::Value::Null), "N/A");
}

#[test]
fn field_display_renders_strings_verbatim() {
    assert_eq!(field_display(&serde_json::json!("steel")), "steel");
}

#[test]
fn field_display_renders_numbers_and_bools() {
    assert_eq!(field_display(&serde_json::json!(12.5)), "12.5");
    assert_eq!(field_display(&serde_json::json!(true)), "true");
}

#[test]
fn field_label_replaces_underscores() {
    assert_eq!(field_label("outer_diameter"), "outer diameter");
    assert_eq!(field_label("material"), "material");
}
