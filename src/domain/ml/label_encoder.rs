//! Label encoding for string-valued columns.
//!
//! Classes are the sorted distinct values seen during `fit`; a value's code
//! is its position in that list.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EncoderError {
    #[error("Encoder has not been fitted")]
    NotFitted,

    #[error("Label '{label}' was not seen during fit")]
    UnseenLabel { label: String },

    #[error("Code {code} is out of range for {n_classes} classes")]
    UnknownCode { code: usize, n_classes: usize },
}

#[derive(Debug, Clone, Default)]
pub struct LabelEncoder {
    classes: Option<Vec<String>>,
}

impl LabelEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit<S: AsRef<str>>(&mut self, values: &[S]) -> &mut Self {
        let mut classes: Vec<String> = values.iter().map(|v| v.as_ref().to_string()).collect();
        classes.sort();
        classes.dedup();
        self.classes = Some(classes);
        self
    }

    pub fn is_fitted(&self) -> bool {
        self.classes.is_some()
    }

    pub fn classes(&self) -> Option<&[String]> {
        self.classes.as_deref()
    }

    pub fn transform<S: AsRef<str>>(&self, values: &[S]) -> Result<Vec<usize>, EncoderError> {
        let classes = self.classes.as_ref().ok_or(EncoderError::NotFitted)?;

        values
            .iter()
            .map(|v| {
                let label = v.as_ref();
                classes
                    .binary_search_by(|c| c.as_str().cmp(label))
                    .map_err(|_| EncoderError::UnseenLabel {
                        label: label.to_string(),
                    })
            })
            .collect()
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, values: &[S]) -> Result<Vec<usize>, EncoderError> {
        self.fit(values);
        self.transform(values)
    }

    pub fn inverse_transform(&self, codes: &[usize]) -> Result<Vec<String>, EncoderError> {
        let classes = self.classes.as_ref().ok_or(EncoderError::NotFitted)?;

        codes
            .iter()
            .map(|&code| {
                classes
                    .get(code)
                    .cloned()
                    .ok_or(EncoderError::UnknownCode {
                        code,
                        n_classes: classes.len(),
                    })
            })
            .collect()
    }
}
