#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureId {
    VideoDubbing,
    AudioToText,
    AudioTranscription,
    TextTranslate,
    TextSummarize,
    TextToSpeech,
    TextToImage,
    ImageToDescription,
    DocumentTranslation,
}

impl FeatureId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VideoDubbing => "video_dubbing",
            Self::AudioToText => "audio_to_text",
            Self::AudioTranscription => "audio_transcription",
            Self::TextTranslate => "text_translate",
            Self::TextSummarize => "text_summarize",
            Self::TextToSpeech => "text_to_speech",
            Self::TextToImage => "text_to_image",
            Self::ImageToDescription => "image_to_description",
            Self::DocumentTranslation => "document_translation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureInput {
    Video,
    Audio,
    Image,
    Document,
    Text,
}

impl FeatureInput {
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Document => "document",
            Self::Text => "text",
        }
    }
}

/// Wire shape of a successful backend response: a JSON text result or a
/// binary media payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureOutput {
    Json,
    Media,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Simulated,
    Live,
}

impl ExecutionMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Simulated => "simulated",
            Self::Live => "live",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    pub id: FeatureId,
    pub title: &'static str,
    pub description: &'static str,
    pub input: FeatureInput,
    pub output: FeatureOutput,
    /// Backend path the live executor posts to.
    pub endpoint: &'static str,
    pub default_mode: ExecutionMode,
}

pub struct FeatureCatalog;

const FEATURE_SPECS: [FeatureSpec; 9] = [
    FeatureSpec {
        id: FeatureId::VideoDubbing,
        title: "Video Dubbing",
        description: "Dub a video into a target language with a chosen voice.",
        input: FeatureInput::Video,
        output: FeatureOutput::Media,
        endpoint: "/video_dubbing",
        default_mode: ExecutionMode::Live,
    },
    FeatureSpec {
        id: FeatureId::AudioToText,
        title: "Audio to Text",
        description: "Transform audio recordings into editable text documents.",
        input: FeatureInput::Audio,
        output: FeatureOutput::Json,
        endpoint: "/audio_dubbing",
        default_mode: ExecutionMode::Live,
    },
    FeatureSpec {
        id: FeatureId::AudioTranscription,
        title: "Audio Transcription",
        description: "Produce a timestamped transcript from an audio track.",
        input: FeatureInput::Audio,
        output: FeatureOutput::Json,
        endpoint: "/audio_transcription",
        default_mode: ExecutionMode::Simulated,
    },
    FeatureSpec {
        id: FeatureId::TextTranslate,
        title: "Text Translation",
        description: "Translate text between supported languages.",
        input: FeatureInput::Text,
        output: FeatureOutput::Json,
        endpoint: "/text_translate",
        default_mode: ExecutionMode::Simulated,
    },
    FeatureSpec {
        id: FeatureId::TextSummarize,
        title: "Text Summarization",
        description: "Condense long text into a short summary.",
        input: FeatureInput::Text,
        output: FeatureOutput::Json,
        endpoint: "/text_summarize",
        default_mode: ExecutionMode::Simulated,
    },
    FeatureSpec {
        id: FeatureId::TextToSpeech,
        title: "Text to Speech",
        description: "Generate spoken audio from text with a voice preset.",
        input: FeatureInput::Text,
        output: FeatureOutput::Media,
        endpoint: "/text_to_speech",
        default_mode: ExecutionMode::Live,
    },
    FeatureSpec {
        id: FeatureId::TextToImage,
        title: "Text to Image",
        description: "Generate an image from a text prompt.",
        input: FeatureInput::Text,
        output: FeatureOutput::Json,
        endpoint: "/text_to_image",
        default_mode: ExecutionMode::Simulated,
    },
    FeatureSpec {
        id: FeatureId::ImageToDescription,
        title: "Image to Description",
        description: "Describe the contents of an image in natural language.",
        input: FeatureInput::Image,
        output: FeatureOutput::Json,
        endpoint: "/image_to_description",
        default_mode: ExecutionMode::Simulated,
    },
    FeatureSpec {
        id: FeatureId::DocumentTranslation,
        title: "Document Translation",
        description: "Translate a whole document while keeping its layout.",
        input: FeatureInput::Document,
        output: FeatureOutput::Json,
        endpoint: "/document_translation",
        default_mode: ExecutionMode::Simulated,
    },
];

impl FeatureCatalog {
    pub fn list() -> &'static [FeatureSpec] {
        &FEATURE_SPECS
    }

    pub fn get(id: FeatureId) -> &'static FeatureSpec {
        match id {
            FeatureId::VideoDubbing => &FEATURE_SPECS[0],
            FeatureId::AudioToText => &FEATURE_SPECS[1],
            FeatureId::AudioTranscription => &FEATURE_SPECS[2],
            FeatureId::TextTranslate => &FEATURE_SPECS[3],
            FeatureId::TextSummarize => &FEATURE_SPECS[4],
            FeatureId::TextToSpeech => &FEATURE_SPECS[5],
            FeatureId::TextToImage => &FEATURE_SPECS[6],
            FeatureId::ImageToDescription => &FEATURE_SPECS[7],
            FeatureId::DocumentTranslation => &FEATURE_SPECS[8],
        }
    }

    pub fn find(slug: &str) -> Option<&'static FeatureSpec> {
        FEATURE_SPECS.iter().find(|spec| spec.id.as_str() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSpec {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub rtl: bool,
}

pub const LANGUAGES: [LanguageSpec; 7] = [
    LanguageSpec { code: "en", name: "English", flag: "\u{1F1FA}\u{1F1F8}", rtl: false },
    LanguageSpec { code: "hi", name: "Hindi", flag: "\u{1F1EE}\u{1F1F3}", rtl: false },
    LanguageSpec { code: "ta", name: "Tamil", flag: "\u{1F1EE}\u{1F1F3}", rtl: false },
    LanguageSpec { code: "te", name: "Telugu", flag: "\u{1F1EE}\u{1F1F3}", rtl: false },
    LanguageSpec { code: "bn", name: "Bengali", flag: "\u{1F1E7}\u{1F1E9}", rtl: false },
    LanguageSpec { code: "mr", name: "Marathi", flag: "\u{1F1EE}\u{1F1F3}", rtl: false },
    LanguageSpec { code: "gu", name: "Gujarati", flag: "\u{1F1EE}\u{1F1F3}", rtl: false },
];

pub fn find_language(code: &str) -> Option<&'static LanguageSpec> {
    LANGUAGES.iter().find(|language| language.code == code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub accent: &'static str,
}

pub const VOICE_PRESETS: [VoiceSpec; 4] = [
    VoiceSpec { id: "female", name: "Sarah (Female)", accent: "US English" },
    VoiceSpec { id: "male", name: "David (Male)", accent: "US English" },
    VoiceSpec { id: "british", name: "Emma (Female)", accent: "British English" },
    VoiceSpec { id: "indian", name: "Priya (Female)", accent: "Indian English" },
];

pub fn find_voice(id: &str) -> Option<&'static VoiceSpec> {
    VOICE_PRESETS.iter().find(|voice| voice.id == id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_lookup_is_deterministic() {
        let first = FeatureCatalog::get(FeatureId::TextToSpeech);
        let second = FeatureCatalog::get(FeatureId::TextToSpeech);
        assert_eq!(first, second);
    }

    #[test]
    fn catalog_order_is_stable() {
        let slugs: Vec<&'static str> = FeatureCatalog::list()
            .iter()
            .map(|spec| spec.id.as_str())
            .collect();
        assert_eq!(
            slugs,
            vec![
                "video_dubbing",
                "audio_to_text",
                "audio_transcription",
                "text_translate",
                "text_summarize",
                "text_to_speech",
                "text_to_image",
                "image_to_description",
                "document_translation",
            ]
        );
    }

    #[test]
    fn every_slug_resolves_back_to_its_spec() {
        for spec in FeatureCatalog::list() {
            let found = FeatureCatalog::find(spec.id.as_str()).expect("slug resolves");
            assert_eq!(found.id, spec.id);
        }
        assert!(FeatureCatalog::find("ppt_to_hologram").is_none());
    }

    #[test]
    fn language_and_voice_lookups() {
        assert_eq!(find_language("hi").expect("hindi").name, "Hindi");
        assert!(find_language("xx").is_none());
        assert_eq!(find_voice("british").expect("voice").name, "Emma (Female)");
        assert!(find_voice("robot").is_none());
    }
}
