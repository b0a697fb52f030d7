//! Inference task identifiers.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A fixed inference capability category, identified on the wire by its
/// hyphenated name (e.g. `"text-classification"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Task {
    AudioClassification,
    AudioToAudio,
    AutomaticSpeechRecognition,
    Conversational,
    DepthEstimation,
    DocumentQuestionAnswering,
    FeatureExtraction,
    FillMask,
    ImageClassification,
    ImageSegmentation,
    ImageToImage,
    ImageToText,
    MaskGeneration,
    ObjectDetection,
    VideoClassification,
    QuestionAnswering,
    ReinforcementLearning,
    SentenceSimilarity,
    Summarization,
    TableQuestionAnswering,
    TabularClassification,
    TabularRegression,
    TextClassification,
    TextGeneration,
    TextToImage,
    TextToSpeech,
    TextToVideo,
    TokenClassification,
    Translation,
    UnconditionalImageGeneration,
    VisualQuestionAnswering,
    ZeroShotClassification,
    ZeroShotImageClassification,
    ZeroShotObjectDetection,
    #[serde(rename = "text-to-3d")]
    TextTo3D,
    #[serde(rename = "image-to-3d")]
    ImageTo3D,
}

impl Task {
    pub const ALL: [Task; 36] = [
        Task::AudioClassification,
        Task::AudioToAudio,
        Task::AutomaticSpeechRecognition,
        Task::Conversational,
        Task::DepthEstimation,
        Task::DocumentQuestionAnswering,
        Task::FeatureExtraction,
        Task::FillMask,
        Task::ImageClassification,
        Task::ImageSegmentation,
        Task::ImageToImage,
        Task::ImageToText,
        Task::MaskGeneration,
        Task::ObjectDetection,
        Task::VideoClassification,
        Task::QuestionAnswering,
        Task::ReinforcementLearning,
        Task::SentenceSimilarity,
        Task::Summarization,
        Task::TableQuestionAnswering,
        Task::TabularClassification,
        Task::TabularRegression,
        Task::TextClassification,
        Task::TextGeneration,
        Task::TextToImage,
        Task::TextToSpeech,
        Task::TextToVideo,
        Task::TokenClassification,
        Task::Translation,
        Task::UnconditionalImageGeneration,
        Task::VisualQuestionAnswering,
        Task::ZeroShotClassification,
        Task::ZeroShotImageClassification,
        Task::ZeroShotObjectDetection,
        Task::TextTo3D,
        Task::ImageTo3D,
    ];

    /// Wire name used by the metadata endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::AudioClassification => "audio-classification",
            Task::AudioToAudio => "audio-to-audio",
            Task::AutomaticSpeechRecognition => "automatic-speech-recognition",
            Task::Conversational => "conversational",
            Task::DepthEstimation => "depth-estimation",
            Task::DocumentQuestionAnswering => "document-question-answering",
            Task::FeatureExtraction => "feature-extraction",
            Task::FillMask => "fill-mask",
            Task::ImageClassification => "image-classification",
            Task::ImageSegmentation => "image-segmentation",
            Task::ImageToImage => "image-to-image",
            Task::ImageToText => "image-to-text",
            Task::MaskGeneration => "mask-generation",
            Task::ObjectDetection => "object-detection",
            Task::VideoClassification => "video-classification",
            Task::QuestionAnswering => "question-answering",
            Task::ReinforcementLearning => "reinforcement-learning",
            Task::SentenceSimilarity => "sentence-similarity",
            Task::Summarization => "summarization",
            Task::TableQuestionAnswering => "table-question-answering",
            Task::TabularClassification => "tabular-classification",
            Task::TabularRegression => "tabular-regression",
            Task::TextClassification => "text-classification",
            Task::TextGeneration => "text-generation",
            Task::TextToImage => "text-to-image",
            Task::TextToSpeech => "text-to-speech",
            Task::TextToVideo => "text-to-video",
            Task::TokenClassification => "token-classification",
            Task::Translation => "translation",
            Task::UnconditionalImageGeneration => "unconditional-image-generation",
            Task::VisualQuestionAnswering => "visual-question-answering",
            Task::ZeroShotClassification => "zero-shot-classification",
            Task::ZeroShotImageClassification => "zero-shot-image-classification",
            Task::ZeroShotObjectDetection => "zero-shot-object-detection",
            Task::TextTo3D => "text-to-3d",
            Task::ImageTo3D => "image-to-3d",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown inference task '{0}'")]
pub struct UnknownTask(pub String);

static BY_NAME: Lazy<HashMap<&'static str, Task>> =
    Lazy::new(|| Task::ALL.iter().map(|t| (t.as_str(), *t)).collect());

impl FromStr for Task {
    type Err = UnknownTask;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| UnknownTask(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for task in Task::ALL {
            let json = serde_json::to_string(&task).unwrap();
            assert_eq!(json, format!("\"{}\"", task.as_str()));
            let back: Task = serde_json::from_str(&json).unwrap();
            assert_eq!(back, task);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "automatic-speech-recognition".parse::<Task>().unwrap(),
            Task::AutomaticSpeechRecognition
        );
        assert_eq!("text-to-3d".parse::<Task>().unwrap(), Task::TextTo3D);
        assert!("text-to-sql".parse::<Task>().is_err());
    }
}
