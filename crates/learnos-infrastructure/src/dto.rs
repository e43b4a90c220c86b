//! Wire DTOs for the personalization backend.
//!
//! Kept separate from the domain types so the wire format can drift
//! (extra fields, nulls) without touching `learnos-core`.

use learnos_core::app::AppDescriptor;
use learnos_core::error::{LearnOsError, Result};
use learnos_core::suggestion::SuggestionList;
use serde::Deserialize;

/// Body of `GET /suggest/{session_id}`.
#[derive(Debug, Deserialize)]
pub struct SuggestResponseDto {
    #[serde(default)]
    pub suggestions: Option<Vec<AppDescriptorDto>>,
}

#[derive(Debug, Deserialize)]
pub struct AppDescriptorDto {
    pub id: String,
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub hint: Option<String>,
}

impl From<AppDescriptorDto> for AppDescriptor {
    fn from(dto: AppDescriptorDto) -> Self {
        AppDescriptor {
            id: dto.id,
            title: dto.title,
            icon: dto.icon,
            hint: dto.hint,
        }
    }
}

/// Interprets a suggestion response body.
///
/// - no (or null) `suggestions` field: `Ok(None)`, meaning "no update"
/// - anything that does not decode, or duplicate ids: `MalformedResponse`
pub fn parse_suggest_body(body: &str) -> Result<Option<SuggestionList>> {
    let dto: SuggestResponseDto = serde_json::from_str(body)
        .map_err(|e| LearnOsError::malformed(format!("suggestion body: {e}")))?;

    dto.suggestions
        .map(|apps| SuggestionList::try_new(apps.into_iter().map(AppDescriptor::from).collect()))
        .transpose()
}
