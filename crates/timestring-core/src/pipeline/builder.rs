//! Builder for creating and configuring Pipeline instances.

use super::Pipeline;
use crate::{
    error::{Result, TimeStringError},
    params::PipelineConfig,
};

/// Builder for creating and configuring Pipeline instances.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
}

impl PipelineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets how many numeric suffixes are tried when naming the output field.
    pub fn with_max_name_attempts(mut self, attempts: u32) -> Self {
        self.config.max_name_attempts = attempts;
        self
    }

    /// Sets the name of the in-memory join key column.
    pub fn with_join_field(mut self, name: impl Into<String>) -> Self {
        self.config.join_field = name.into();
        self
    }

    /// Writes into the desired field even when it already exists, instead
    /// of picking a suffixed name.
    pub fn overwrite_output(mut self, overwrite: bool) -> Self {
        self.config.overwrite_output = overwrite;
        self
    }

    pub fn validate_names(mut self, validate: bool) -> Self {
        self.config.validate_names = validate;
        self
    }

    pub fn with_field_length(mut self, length: Option<u32>) -> Self {
        self.config.field_length = length;
        self
    }

    /// Records start and end timestamps for every step.
    pub fn report_timing(mut self, report: bool) -> Self {
        self.config.report_timing = report;
        self
    }

    /// Builds the configured pipeline.
    ///
    /// # Errors
    ///
    /// Returns `TimeStringError::Configuration` if the join field name is
    /// empty or the field length is zero.
    pub fn build(self) -> Result<Pipeline> {
        if self.config.join_field.trim().is_empty() {
            return Err(TimeStringError::Configuration {
                message: "join field name must not be empty".to_string(),
            });
        }
        if self.config.field_length == Some(0) {
            return Err(TimeStringError::Configuration {
                message: "field length must be positive".to_string(),
            });
        }

        Ok(Pipeline::new(self.config))
    }
}
