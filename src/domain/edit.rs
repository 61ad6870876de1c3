/// Inline title editing. At most one task is edited at a time; starting a
/// new edit while another is active switches the target directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing { task_id: i64, buffer: String },
}

impl EditMode {
    pub fn begin(task_id: i64, current_title: impl Into<String>) -> Self {
        Self::Editing {
            task_id,
            buffer: current_title.into(),
        }
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self {
            Self::Viewing => None,
            Self::Editing { task_id, .. } => Some(*task_id),
        }
    }

    pub fn is_editing(&self, id: i64) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn buffer(&self) -> &str {
        match self {
            Self::Viewing => "",
            Self::Editing { buffer, .. } => buffer,
        }
    }

    /// Replaces the buffer contents. Ignored while viewing.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if let Self::Editing { buffer, .. } = self {
            *buffer = text.into();
        }
    }

    /// Leaves edit mode, handing back whatever was in the buffer.
    pub fn finish(&mut self) -> String {
        match std::mem::take(self) {
            Self::Viewing => String::new(),
            Self::Editing { buffer, .. } => buffer,
        }
    }
}
