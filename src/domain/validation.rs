use std::collections::BTreeMap;

use serde::Serialize;
use validator::ValidateUrl;

const TEXT_LENGTH: &str = "Text must be between 10 and 300 characters";
const TEXT_REQUIRED: &str = "Text field is required";
const HANDLE_LENGTH: &str = "Handle must be between 2 and 40 characters";
const HANDLE_REQUIRED: &str = "Handle is required";
const STATUS_REQUIRED: &str = "Status field is required";
const SKILLS_REQUIRED: &str = "Skills field is required";
const URL_INVALID: &str = "Not a valid URL";
const TITLE_REQUIRED: &str = "Job title is required";
const COMPANY_REQUIRED: &str = "Company is required";
const FROM_REQUIRED: &str = "From date is required";
const SCHOOL_REQUIRED: &str = "School is required";
const DEGREE_REQUIRED: &str = "Degree is required";
const FIELDOFSTUDY_REQUIRED: &str = "Field of study is required";

/// Field-keyed error map. Checks run in a fixed order and never
/// short-circuit; setting a field that already has an error overwrites it
/// (last write wins), which is part of the validation contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug)]
pub struct ValidationOutcome {
    pub errors: FieldErrors,
    pub is_valid: bool,
}

impl ValidationOutcome {
    fn new(errors: FieldErrors) -> Self {
        let is_valid = errors.is_empty();
        Self { errors, is_valid }
    }
}

/// Raw post/comment payload as submitted by the client. Absent fields stay
/// `None` so presence can be distinguished from an empty value.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub handle: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub skills: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub wechat: Option<String>,
    pub qq: Option<String>,
    pub tengxunkt: Option<String>,
    pub wangyikt: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ExperienceDraft {
    pub current: Option<bool>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EducationDraft {
    pub current: Option<bool>,
    pub school: Option<String>,
    pub degree: Option<String>,
    pub fieldofstudy: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub description: Option<String>,
}

pub fn validate_post_input(draft: &PostDraft) -> ValidationOutcome {
    let mut errors = FieldErrors::new();
    let text = draft.text.as_deref().unwrap_or("");

    if !length_within(text, 10, 300) {
        errors.set("text", TEXT_LENGTH);
    }
    // The empty check runs second and overwrites the length error.
    if text.is_empty() {
        errors.set("text", TEXT_REQUIRED);
    }

    ValidationOutcome::new(errors)
}

pub fn validate_profile_input(draft: &ProfileDraft) -> ValidationOutcome {
    let mut errors = FieldErrors::new();
    let handle = draft.handle.as_deref().unwrap_or("");
    let status = draft.status.as_deref().unwrap_or("");
    let skills = draft.skills.as_deref().unwrap_or("");

    if !length_within(handle, 2, 40) {
        errors.set("handle", HANDLE_LENGTH);
    }
    if handle.is_empty() {
        errors.set("handle", HANDLE_REQUIRED);
    }
    if status.is_empty() {
        errors.set("status", STATUS_REQUIRED);
    }
    if skills.is_empty() {
        errors.set("skills", SKILLS_REQUIRED);
    }

    check_url(&mut errors, "website", draft.website.as_deref());
    check_url(&mut errors, "tengxunkt", draft.tengxunkt.as_deref());
    check_url(&mut errors, "wangyikt", draft.wangyikt.as_deref());

    ValidationOutcome::new(errors)
}

pub fn validate_experience_input(draft: &ExperienceDraft) -> ValidationOutcome {
    let mut errors = FieldErrors::new();

    if is_blank(draft.title.as_deref()) {
        errors.set("title", TITLE_REQUIRED);
    }
    if is_blank(draft.company.as_deref()) {
        errors.set("company", COMPANY_REQUIRED);
    }
    if is_blank(draft.from.as_deref()) {
        errors.set("from", FROM_REQUIRED);
    }

    ValidationOutcome::new(errors)
}

pub fn validate_education_input(draft: &EducationDraft) -> ValidationOutcome {
    let mut errors = FieldErrors::new();

    if is_blank(draft.school.as_deref()) {
        errors.set("school", SCHOOL_REQUIRED);
    }
    if is_blank(draft.degree.as_deref()) {
        errors.set("degree", DEGREE_REQUIRED);
    }
    if is_blank(draft.fieldofstudy.as_deref()) {
        errors.set("fieldofstudy", FIELDOFSTUDY_REQUIRED);
    }
    if is_blank(draft.from.as_deref()) {
        errors.set("from", FROM_REQUIRED);
    }

    ValidationOutcome::new(errors)
}

fn length_within(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

fn is_blank(value: Option<&str>) -> bool {
    value.unwrap_or("").is_empty()
}

fn check_url(errors: &mut FieldErrors, field: &'static str, value: Option<&str>) {
    if let Some(url) = value.filter(|v| !v.is_empty()) {
        if !url.validate_url() {
            errors.set(field, URL_INVALID);
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn post_draft(text: &str) -> PostDraft {
        PostDraft {
            text: Some(text.to_string()),
        }
    }

    #[test]
    fn test_field_errors_last_write_wins() {
        let mut errors = FieldErrors::new();
        errors.set("text", TEXT_LENGTH);
        errors.set("text", TEXT_REQUIRED);
        assert_eq!(errors.get("text"), Some(TEXT_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[rstest]
    #[case("a234567890".to_string())]
    #[case("x".repeat(300))]
    fn test_post_text_boundary_valid(#[case] text: String) {
        let outcome = validate_post_input(&post_draft(&text));
        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_post_text_too_short_is_length_error() {
        let outcome = validate_post_input(&post_draft("123456789"));
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors.get("text"), Some(TEXT_LENGTH));
    }

    #[test]
    fn test_post_text_too_long_is_length_error() {
        let outcome = validate_post_input(&post_draft(&"x".repeat(301)));
        assert_eq!(outcome.errors.get("text"), Some(TEXT_LENGTH));
    }

    #[test]
    fn test_post_text_empty_reports_required_not_length() {
        let outcome = validate_post_input(&post_draft(""));
        assert_eq!(outcome.errors.get("text"), Some(TEXT_REQUIRED));
    }

    #[test]
    fn test_post_text_missing_coerced_to_empty() {
        let outcome = validate_post_input(&PostDraft::default());
        assert_eq!(outcome.errors.get("text"), Some(TEXT_REQUIRED));
    }

    #[test]
    fn test_post_is_valid_iff_errors_empty() {
        for text in ["", "short", "long enough text"] {
            let outcome = validate_post_input(&post_draft(text));
            assert_eq!(outcome.is_valid, outcome.errors.is_empty());
        }
    }

    fn minimal_profile() -> ProfileDraft {
        ProfileDraft {
            handle: Some("ab".to_string()),
            status: Some("x".to_string()),
            skills: Some("a,b".to_string()),
            ..ProfileDraft::default()
        }
    }

    #[test]
    fn test_profile_minimal_is_valid() {
        let outcome = validate_profile_input(&minimal_profile());
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_profile_empty_handle_reports_required() {
        let mut draft = minimal_profile();
        draft.handle = Some(String::new());
        let outcome = validate_profile_input(&draft);
        // The length check fires first but the required check overwrites it.
        assert_eq!(outcome.errors.get("handle"), Some(HANDLE_REQUIRED));
    }

    #[rstest]
    #[case("a".to_string())]
    #[case("x".repeat(41))]
    fn test_profile_handle_length_out_of_range(#[case] handle: String) {
        let mut draft = minimal_profile();
        draft.handle = Some(handle);
        let outcome = validate_profile_input(&draft);
        assert_eq!(outcome.errors.get("handle"), Some(HANDLE_LENGTH));
    }

    #[test]
    fn test_profile_checks_do_not_short_circuit() {
        let outcome = validate_profile_input(&ProfileDraft::default());
        assert_eq!(outcome.errors.get("handle"), Some(HANDLE_REQUIRED));
        assert_eq!(outcome.errors.get("status"), Some(STATUS_REQUIRED));
        assert_eq!(outcome.errors.get("skills"), Some(SKILLS_REQUIRED));
        assert_eq!(outcome.errors.len(), 3);
    }

    #[rstest]
    #[case("website")]
    #[case("tengxunkt")]
    #[case("wangyikt")]
    fn test_profile_url_fields_rejected_when_malformed(#[case] field: &str) {
        let mut draft = minimal_profile();
        let value = Some("not-a-url".to_string());
        match field {
            "website" => draft.website = value,
            "tengxunkt" => draft.tengxunkt = value,
            _ => draft.wangyikt = value,
        }
        let outcome = validate_profile_input(&draft);
        assert_eq!(outcome.errors.get(field), Some(URL_INVALID));
    }

    #[test]
    fn test_profile_url_fields_skipped_when_absent_or_empty() {
        let mut draft = minimal_profile();
        draft.website = Some(String::new());
        let outcome = validate_profile_input(&draft);
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_profile_valid_website_accepted() {
        let mut draft = minimal_profile();
        draft.website = Some("https://example.com".to_string());
        let outcome = validate_profile_input(&draft);
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_experience_required_fields_independent() {
        let outcome = validate_experience_input(&ExperienceDraft::default());
        assert_eq!(outcome.errors.get("title"), Some(TITLE_REQUIRED));
        assert_eq!(outcome.errors.get("company"), Some(COMPANY_REQUIRED));
        assert_eq!(outcome.errors.get("from"), Some(FROM_REQUIRED));
        assert_eq!(outcome.errors.len(), 3);
    }

    #[test]
    fn test_experience_complete_is_valid() {
        let draft = ExperienceDraft {
            title: Some("Developer".to_string()),
            company: Some("Acme".to_string()),
            from: Some("2020-01-01".to_string()),
            ..ExperienceDraft::default()
        };
        assert!(validate_experience_input(&draft).is_valid);
    }

    #[test]
    fn test_education_required_fields_independent() {
        let outcome = validate_education_input(&EducationDraft::default());
        assert_eq!(outcome.errors.get("school"), Some(SCHOOL_REQUIRED));
        assert_eq!(outcome.errors.get("degree"), Some(DEGREE_REQUIRED));
        assert_eq!(outcome.errors.get("fieldofstudy"), Some(FIELDOFSTUDY_REQUIRED));
        assert_eq!(outcome.errors.get("from"), Some(FROM_REQUIRED));
    }

    #[test]
    fn test_education_complete_is_valid() {
        let draft = EducationDraft {
            school: Some("MIT".to_string()),
            degree: Some("BSc".to_string()),
            fieldofstudy: Some("CS".to_string()),
            from: Some("2018-09-01".to_string()),
            ..EducationDraft::default()
        };
        assert!(validate_education_input(&draft).is_valid);
    }
}
