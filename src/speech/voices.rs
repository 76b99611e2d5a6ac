//! Voice catalogue shaping for the UI voice picker.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// One entry of the speech service's voice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Voice {
    pub short_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub locale: String,
}

/// UI group name → locale offered in that group.
pub const LANGUAGE_GROUPS: [(&str, &str); 2] = [("Hebrew", "he-IL"), ("English", "en-US")];

/// Voice groups for the picker, serialized as a JSON object whose keys keep
/// the order of [`LANGUAGE_GROUPS`]. Each group maps `ShortName` → label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceCatalogue {
    groups: Vec<(String, BTreeMap<String, String>)>,
}

impl VoiceCatalogue {
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.groups
            .iter()
            .find(|(group, _)| group == name)
            .map(|(_, entries)| entries)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(group, _)| group.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for VoiceCatalogue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (group, entries) in &self.groups {
            map.serialize_entry(group, entries)?;
        }
        map.end()
    }
}

/// `he-IL-HilaNeural` → `Hila`; names that do not follow the pattern pass through.
#[must_use]
pub fn voice_display_name(short_name: &str) -> String {
    let parts: Vec<&str> = short_name.split('-').collect();
    if parts.len() > 2 {
        parts[2].replace("Neural", "")
    } else {
        short_name.to_string()
    }
}

#[must_use]
pub fn hebrew_gender(gender: &str) -> &'static str {
    if gender == "Female" { "נקבה" } else { "זכר" }
}

/// Groups the voices of the supported locales for the voice picker.
#[must_use]
pub fn format_voice_catalogue(voices: &[Voice]) -> VoiceCatalogue {
    let groups = LANGUAGE_GROUPS
        .iter()
        .map(|(group, locale)| {
            let entries = voices
                .iter()
                .filter(|voice| voice.locale == *locale)
                .map(|voice| {
                    let name = voice_display_name(&voice.short_name);
                    let gender = if *group == "Hebrew" {
                        hebrew_gender(&voice.gender)
                    } else {
                        voice.gender.as_str()
                    };
                    (voice.short_name.clone(), format!("{gender} ({name})"))
                })
                .collect();
            ((*group).to_string(), entries)
        })
        .collect();

    VoiceCatalogue { groups }
}
