use clap::ValueEnum;
use serde::Serialize;
use strum::{Display, EnumIter};

use crate::analyze::prelude::ValidationError;

/// The song section the submitted lyrics belong to. The accepted values are
/// fixed; the argument parser rejects anything outside this set, so the
/// request builder takes them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum, Display, EnumIter)]
pub enum Section {
    #[default]
    Verse,
    #[serde(rename = "Pre-Chorus")]
    #[strum(serialize = "Pre-Chorus")]
    PreChorus,
    Chorus,
    Bridge,
    Outro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum, Display, EnumIter)]
pub enum Mood {
    #[default]
    Heartbreak,
    Hope,
    Anger,
    Joy,
    Nostalgia,
    Defiance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum, Display, EnumIter)]
pub enum Genre {
    #[default]
    Pop,
    Rock,
    #[serde(rename = "Hip-Hop")]
    #[strum(serialize = "Hip-Hop")]
    HipHop,
    Country,
    #[serde(rename = "R&B")]
    #[strum(serialize = "R&B")]
    Rnb,
    Folk,
    Electronic,
}

/// One submission to the analysis endpoint. Constructed fresh for every
/// exchange, never reused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub lyrics: String,
    pub tone: u8,
    pub section: Section,
    pub mood: Mood,
    pub genre: Genre,
}

impl AnalysisRequest {
    /// Trims the lyrics and assembles the payload. Fails when nothing is
    /// left after trimming; no other validation happens here because the
    /// argument parser already constrains tone and the enum fields.
    pub fn build(
        raw_lyrics: &str,
        tone: u8,
        section: Section,
        mood: Mood,
        genre: Genre,
    ) -> Result<Self, ValidationError> {
        let lyrics = raw_lyrics.trim();
        if lyrics.is_empty() {
            return Err(ValidationError::EmptyLyrics);
        }

        Ok(Self {
            lyrics: lyrics.to_string(),
            tone,
            section,
            mood,
            genre,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_trims_surrounding_whitespace() {
        let request = AnalysisRequest::build(
            "  city lights hum\n",
            50,
            Section::Verse,
            Mood::Heartbreak,
            Genre::Pop,
        )
        .unwrap();

        assert_eq!(request.lyrics, "city lights hum");
        assert_eq!(request.tone, 50);
    }

    #[test]
    fn build_rejects_whitespace_only_lyrics() {
        let result = AnalysisRequest::build("   \n\t ", 50, Section::Verse, Mood::Hope, Genre::Rock);

        assert!(matches!(result, Err(ValidationError::EmptyLyrics)));
    }

    #[test]
    fn build_rejects_empty_lyrics() {
        let result = AnalysisRequest::build("", 0, Section::Chorus, Mood::Anger, Genre::Folk);

        assert!(matches!(result, Err(ValidationError::EmptyLyrics)));
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let request = AnalysisRequest::build(
            "hold me like the sky",
            80,
            Section::PreChorus,
            Mood::Heartbreak,
            Genre::HipHop,
        )
        .unwrap();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["lyrics"], "hold me like the sky");
        assert_eq!(value["tone"], 80);
        assert_eq!(value["section"], "Pre-Chorus");
        assert_eq!(value["mood"], "Heartbreak");
        assert_eq!(value["genre"], "Hip-Hop");
    }

    #[test]
    fn tone_serializes_as_a_number() {
        let request =
            AnalysisRequest::build("la la la", 0, Section::Outro, Mood::Joy, Genre::Electronic)
                .unwrap();

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"tone\":0"));
    }

    #[test]
    fn display_labels_match_wire_values() {
        assert_eq!(Section::PreChorus.to_string(), "Pre-Chorus");
        assert_eq!(Genre::Rnb.to_string(), "R&B");
        assert_eq!(Mood::Nostalgia.to_string(), "Nostalgia");
    }
}
