//! Task helpers on [`InferenceClient`].

use super::types::{
    ClassificationOutput, FillMaskOutput, Inputs, SpeechRecognitionOutput, SummarizationOutput,
    SummarizationParameters, TextGenerationOutput, TextGenerationParameters,
};
use crate::client::{InferenceClient, RequestOptions, RequestSpec};
use crate::codec::{ContentType, RequestBody};
use crate::task::Task;
use crate::Result;
use bytes::Bytes;

impl InferenceClient {
    /// Continue text from a prompt.
    pub async fn text_generation(
        &self,
        inputs: &str,
        parameters: Option<TextGenerationParameters>,
        model: Option<&str>,
        options: Option<RequestOptions>,
    ) -> Result<Vec<TextGenerationOutput>> {
        let body = RequestBody::json(&Inputs { inputs, parameters })?;
        let spec = RequestSpec::json(Task::TextGeneration, body)
            .maybe_model(model)
            .options(self.options_or_default(options));
        self.execute(spec).await
    }

    /// Likelihood of each class for every input, typically sentiment analysis.
    pub async fn text_classification(
        &self,
        inputs: &[String],
        model: Option<&str>,
        options: Option<RequestOptions>,
    ) -> Result<Vec<Vec<ClassificationOutput>>> {
        let body = RequestBody::json(&Inputs::<_, ()> {
            inputs,
            parameters: None,
        })?;
        let spec = RequestSpec::json(Task::TextClassification, body)
            .maybe_model(model)
            .options(self.options_or_default(options));
        self.execute(spec).await
    }

    pub async fn summarization(
        &self,
        inputs: &str,
        parameters: Option<SummarizationParameters>,
        model: Option<&str>,
        options: Option<RequestOptions>,
    ) -> Result<Vec<SummarizationOutput>> {
        let body = RequestBody::json(&Inputs { inputs, parameters })?;
        let spec = RequestSpec::json(Task::Summarization, body)
            .maybe_model(model)
            .options(self.options_or_default(options));
        self.execute(spec).await
    }

    /// Fill the mask token of each input.
    pub async fn fill_mask(
        &self,
        inputs: &[String],
        model: Option<&str>,
        options: Option<RequestOptions>,
    ) -> Result<Vec<FillMaskOutput>> {
        let body = RequestBody::json(&Inputs::<_, ()> {
            inputs,
            parameters: None,
        })?;
        let spec = RequestSpec::json(Task::FillMask, body)
            .maybe_model(model)
            .options(self.options_or_default(options));
        self.execute(spec).await
    }

    /// Synthesize speech; returns the encoded audio exactly as served.
    pub async fn text_to_speech(
        &self,
        inputs: &str,
        model: Option<&str>,
        options: Option<RequestOptions>,
    ) -> Result<Bytes> {
        let body = RequestBody::json(&Inputs::<_, ()> {
            inputs,
            parameters: None,
        })?;
        let spec = RequestSpec::json(Task::TextToSpeech, body)
            .response_content_type(ContentType::Binary)
            .maybe_model(model)
            .options(self.options_or_default(options));
        self.execute(spec).await
    }

    /// Transcribe raw audio (flac, wav, mp3, ...).
    pub async fn automatic_speech_recognition(
        &self,
        audio: impl Into<Bytes>,
        model: Option<&str>,
        options: Option<RequestOptions>,
    ) -> Result<SpeechRecognitionOutput> {
        let spec = RequestSpec::binary(Task::AutomaticSpeechRecognition, audio)
            .maybe_model(model)
            .options(self.options_or_default(options));
        self.execute(spec).await
    }

    pub async fn image_classification(
        &self,
        image: impl Into<Bytes>,
        model: Option<&str>,
        options: Option<RequestOptions>,
    ) -> Result<Vec<ClassificationOutput>> {
        let spec = RequestSpec::binary(Task::ImageClassification, image)
            .maybe_model(model)
            .options(self.options_or_default(options));
        self.execute(spec).await
    }
}
