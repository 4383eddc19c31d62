use crate::{SetupError, Size, TemplateId, Vec2};

/// Configuration for [`crate::Recycler`].
///
/// Layout parameters live on the layout policy itself; these options only cover the windowing
/// engine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecyclerOptions {
    /// Extra indexes kept alive on each side of the visible range.
    ///
    /// Larger values trade idle views for fewer activations right at the viewport edges.
    pub buffer: usize,

    /// Template used for indexes where the data source does not pick one.
    pub default_template: Option<TemplateId>,

    /// Size of the viewport. Required; without it nothing is ever activated.
    pub viewport: Option<Size>,

    /// Scroll offset applied when the engine is created.
    pub initial_offset: Vec2,
}

impl Default for RecyclerOptions {
    fn default() -> Self {
        Self {
            buffer: 1,
            default_template: Some(TemplateId::default()),
            viewport: None,
            initial_offset: Vec2::ZERO,
        }
    }
}

impl RecyclerOptions {
    /// Creates options for a viewport of the given size with the default template and a buffer
    /// of one index.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport: Some(viewport),
            ..Self::default()
        }
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_default_template(mut self, template: Option<TemplateId>) -> Self {
        self.default_template = template;
        self
    }

    pub fn with_viewport(mut self, viewport: Option<Size>) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_initial_offset(mut self, offset: Vec2) -> Self {
        self.initial_offset = offset;
        self
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.viewport.is_none() {
            return Err(SetupError::MissingViewport);
        }
        if self.default_template.is_none() {
            return Err(SetupError::MissingDefaultTemplate);
        }
        Ok(())
    }
}
