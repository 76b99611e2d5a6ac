#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tldr_reader::ai::{AiProcessor, Summarizer, Translator};
use tldr_reader::article::ArticleFetcher;
use tldr_reader::errors::{FetchError, InferenceError, ModelLoadingError, SpeechError};
use tldr_reader::speech::{SpeechSynthesizer, Voice};

pub const SUMMARY_SENTINEL: &str = "<<summary-sentinel>>";
pub const TRANSLATION_SENTINEL: &str = "<<translation-sentinel>>";

pub const ENGLISH_ARTICLE: &str = "The city council approved a new budget on Tuesday evening \
    after a long debate about public transportation and housing. Officials said the plan \
    would add more buses to busy routes, repair several old bridges, and fund affordable \
    homes for families who have struggled with rising rents over the past few years. \
    Residents who attended the meeting told reporters they were cautiously optimistic \
    about the changes, although some worried that the promised improvements would take \
    too long to arrive.";

pub const FRENCH_ARTICLE: &str = "Le gouvernement a annoncé mardi une série de mesures \
    destinées à soutenir les ménages face à la hausse des prix de l'énergie. Selon le \
    ministre de l'Économie, ces aides seront versées dès le mois prochain et concerneront \
    plusieurs millions de foyers. Les associations de consommateurs ont salué cette \
    décision tout en regrettant que les montants restent modestes par rapport aux \
    factures que doivent payer les familles les plus modestes.";

pub const HEBREW_ARTICLE: &str = "הממשלה הודיעה היום על תוכנית חדשה לשיפור התחבורה \
    הציבורית בערים הגדולות. לפי התוכנית, יתווספו קווי אוטובוס חדשים ותדירות הנסיעות \
    תגדל בשעות העומס. תושבים רבים בירכו על ההחלטה, אך חלקם הביעו חשש שהשינויים \
    יימשכו זמן רב מדי.";

pub struct FakeFetcher {
    result: Result<String, String>,
    calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn returning(text: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleFetcher for FakeFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(FetchError::Http)
    }
}

pub struct FakeSummarizer {
    fail: bool,
    pub calls: Mutex<Vec<(String, u32, u32)>>,
}

impl FakeSummarizer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, u32, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(
        &self,
        text: &str,
        min_length: u32,
        max_length: u32,
    ) -> Result<String, InferenceError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), min_length, max_length));
        if self.fail {
            return Err(InferenceError::Api {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(SUMMARY_SENTINEL.to_string())
    }
}

pub struct FakeTranslator {
    pub calls: Mutex<Vec<(String, u32)>>,
}

impl FakeTranslator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, max_length: u32) -> Result<String, InferenceError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), max_length));
        Ok(TRANSLATION_SENTINEL.to_string())
    }
}

pub fn processor(
    fetcher: &Arc<FakeFetcher>,
    summarizer: &Arc<FakeSummarizer>,
    translator: &Arc<FakeTranslator>,
) -> AiProcessor {
    AiProcessor::from_models(
        Ok(summarizer.clone() as Arc<dyn Summarizer>),
        Ok(translator.clone() as Arc<dyn Translator>),
        fetcher.clone() as Arc<dyn ArticleFetcher>,
    )
}

pub fn unavailable_processor(fetcher: &Arc<FakeFetcher>) -> AiProcessor {
    AiProcessor::from_models(
        Err(ModelLoadingError::new(
            "sshleifer/distilbart-cnn-12-6",
            "tokenizer download failed",
        )),
        Ok(FakeTranslator::new() as Arc<dyn Translator>),
        fetcher.clone() as Arc<dyn ArticleFetcher>,
    )
}

pub struct FakeSpeech {
    pub voices: Vec<Voice>,
    pub fail: bool,
}

#[async_trait]
impl SpeechSynthesizer for FakeSpeech {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SpeechError> {
        if self.fail {
            return Err(SpeechError::Api {
                status: 400,
                message: "bad voice".to_string(),
            });
        }
        Ok(format!("{voice}:{text}").into_bytes())
    }

    async fn list_voices(&self) -> Result<Vec<Voice>, SpeechError> {
        if self.fail {
            return Err(SpeechError::Http("connection refused".to_string()));
        }
        Ok(self.voices.clone())
    }
}

pub fn voice(short_name: &str, gender: &str, locale: &str) -> Voice {
    Voice {
        short_name: short_name.to_string(),
        gender: gender.to_string(),
        locale: locale.to_string(),
    }
}
