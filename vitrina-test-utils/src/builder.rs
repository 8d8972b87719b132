//! Declarative test builder.
//!
//! Endpoints are queued on the builder and created on the mock server during `build()`.

use mockito::Mock;

use crate::{error::TestError, setup::TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    translation_endpoints: Vec<(String, String, String, usize)>, // (text, target_lang, translated, expected_requests)
    failing_translation_endpoints: Vec<(String, usize, usize)>, // (text, status, expected_requests)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            translation_endpoints: Vec::new(),
            failing_translation_endpoints: Vec::new(),
        }
    }

    /// Add a translation endpoint returning `translated` for `text` in `target_lang`.
    ///
    /// The mock will verify it was called exactly `expected_requests` times.
    pub fn with_translation(
        mut self,
        text: &str,
        target_lang: &str,
        translated: &str,
        expected_requests: usize,
    ) -> Self {
        self.translation_endpoints.push((
            text.to_string(),
            target_lang.to_string(),
            translated.to_string(),
            expected_requests,
        ));
        self
    }

    /// Add a translation endpoint answering requests for `text` with `status`.
    pub fn with_failing_translation(
        mut self,
        text: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.failing_translation_endpoints
            .push((text.to_string(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vitrina_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), vitrina_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_mock_endpoint(|server| {
    ///         server
    ///             .mock("POST", "/language/translate/v2")
    ///             .with_status(429)
    ///             .create()
    ///     })
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup, creating every queued mock endpoint.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Mock server and database ready for use
    /// - `Err(TestError::DbErr)` - The in-memory database could not be opened
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        for (text, target_lang, translated, expected_requests) in self.translation_endpoints {
            let mock = setup.create_translation_endpoint(
                &text,
                &target_lang,
                &translated,
                expected_requests,
            );
            setup.mocks.push(mock);
        }

        for (text, status, expected_requests) in self.failing_translation_endpoints {
            let mock = setup.create_failing_translation_endpoint(&text, status, expected_requests);
            setup.mocks.push(mock);
        }

        for mock_builder in self.mock_builders {
            let mock = mock_builder(&mut setup.server);
            setup.mocks.push(mock);
        }

        Ok(setup)
    }
}
