//! Message lookup and placeholder interpolation

use std::sync::Arc;

use tracing::warn;

use crate::tree::MessageTree;

/// Resolves messages against one locale's merged tree.
///
/// Cheap to create and clone; the tree is shared with the manager's cache,
/// not copied. A translator never fails: unresolved keys come back as the
/// key itself, a visible and greppable placeholder.
#[derive(Debug, Clone)]
pub struct Translator {
    tree: Arc<MessageTree>,
}

impl Translator {
    /// Bind a translator to a merged message tree
    pub fn new(tree: Arc<MessageTree>) -> Self {
        Self { tree }
    }

    /// Look up a message by dot-separated key
    pub fn translate(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(text) => text.to_string(),
            None => {
                warn!("No translation resolved for key: {}", key);
                key.to_string()
            }
        }
    }

    /// Look up a message and substitute `{{name}}` placeholders.
    ///
    /// Interpolation is partial by design: placeholders without a matching
    /// variable stay literal, and variables without a matching placeholder
    /// are ignored. Formatting never fails a render.
    pub fn translate_with(&self, key: &str, vars: &[(&str, String)]) -> String {
        let mut message = self.translate(key);
        for (name, value) in vars {
            let placeholder = format!("{{{{{}}}}}", name);
            message = message.replace(&placeholder, value);
        }
        message
    }

    /// Whether the bound tree resolves the key to a non-empty message
    pub fn has_message(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// The tree this translator reads from
    pub fn tree(&self) -> &Arc<MessageTree> {
        &self.tree
    }

    // Empty leaves count as unresolved.
    fn lookup(&self, key: &str) -> Option<&str> {
        self.tree.resolve(key).filter(|text| !text.is_empty())
    }
}

/// Build the variable slice for [`Translator::translate_with`].
///
/// ```rust
/// use pdfpress_i18n::{message_args, I18nManager, Locale};
///
/// # fn example(manager: &I18nManager) {
/// let translator = manager.translator(Locale::French);
/// let greeting = translator.translate_with(
///     "common.greeting",
///     message_args!["name" => "Ada"],
/// );
/// # }
/// ```
#[macro_export]
macro_rules! message_args {
    () => {
        &[]
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        &[$(($key, $value.to_string())),+]
    };
}
