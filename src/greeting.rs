//! Greeting templates and sentence rendering.
//!
//! A greeting template is a short pattern such as `"¡{greeting}, {name}!"`
//! holding exactly one `{greeting}` and one `{name}` placeholder. Templates
//! are parsed once into a [`GreetingTemplate`], which records where each
//! placeholder sits, so rendering is a single pass that cannot drop or
//! duplicate either value.

use crate::locale::LocaleBundle;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Placeholder replaced by the bundle's greeting word.
pub const GREETING_PLACEHOLDER: &str = "{greeting}";
/// Placeholder replaced by the person's name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// The two substitution slots a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// The bare greeting word, for example `Hola`.
    Greeting,
    /// The person's name.
    Name,
}

impl Placeholder {
    /// Literal token for this placeholder.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Greeting => GREETING_PLACEHOLDER,
            Self::Name => NAME_PLACEHOLDER,
        }
    }

    const fn other(self) -> Self {
        match self {
            Self::Greeting => Self::Name,
            Self::Name => Self::Greeting,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Errors raised when a template does not hold both placeholders exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template never mentions the placeholder.
    #[error("template '{template}' is missing the {placeholder} placeholder")]
    Missing {
        /// Offending template source.
        template: String,
        /// Placeholder that was not found.
        placeholder: Placeholder,
    },
    /// The template mentions the placeholder more than once.
    #[error("template '{template}' repeats the {placeholder} placeholder {count} times")]
    Repeated {
        /// Offending template source.
        template: String,
        /// Placeholder that appears more than once.
        placeholder: Placeholder,
        /// Number of occurrences found.
        count: usize,
    },
}

/// A validated greeting template.
///
/// The source is split around its two placeholders into `lead`, `middle` and
/// `trail` segments, with `first` naming whichever placeholder comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingTemplate {
    source: String,
    first: Placeholder,
    lead: String,
    middle: String,
    trail: String,
}

impl GreetingTemplate {
    /// Parse and validate a template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when either placeholder is absent or
    /// appears more than once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use greeter::greeting::GreetingTemplate;
    ///
    /// let template = GreetingTemplate::parse("¡{greeting}, {name}!")?;
    /// assert_eq!(template.render("Hola", "Ana"), "¡Hola, Ana!");
    /// assert!(GreetingTemplate::parse("{greeting}!").is_err());
    /// # Ok::<(), greeter::greeting::TemplateError>(())
    /// ```
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let greeting_at = locate(source, Placeholder::Greeting)?;
        let name_at = locate(source, Placeholder::Name)?;
        let first = if greeting_at < name_at {
            Placeholder::Greeting
        } else {
            Placeholder::Name
        };
        let missing = |placeholder| TemplateError::Missing {
            template: source.to_owned(),
            placeholder,
        };
        let (lead, rest) = source
            .split_once(first.token())
            .ok_or_else(|| missing(first))?;
        let (middle, trail) = rest
            .split_once(first.other().token())
            .ok_or_else(|| missing(first.other()))?;
        Ok(Self {
            source: source.to_owned(),
            first,
            lead: lead.to_owned(),
            middle: middle.to_owned(),
            trail: trail.to_owned(),
        })
    }

    /// The template text as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Which placeholder appears first in the sentence.
    #[must_use]
    pub const fn leading_placeholder(&self) -> Placeholder {
        self.first
    }

    /// Substitute `greeting` and `name` into the template.
    ///
    /// Values are inserted verbatim; a name containing `{greeting}` is not
    /// substituted a second time.
    #[must_use]
    pub fn render(&self, greeting: &str, name: &str) -> String {
        let value = |placeholder| match placeholder {
            Placeholder::Greeting => greeting,
            Placeholder::Name => name,
        };
        let first = value(self.first);
        let second = value(self.first.other());
        let mut out = String::with_capacity(
            self.lead.len() + first.len() + self.middle.len() + second.len() + self.trail.len(),
        );
        out.push_str(&self.lead);
        out.push_str(first);
        out.push_str(&self.middle);
        out.push_str(second);
        out.push_str(&self.trail);
        out
    }
}

impl fmt::Display for GreetingTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for GreetingTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

fn locate(source: &str, placeholder: Placeholder) -> Result<usize, TemplateError> {
    let token = placeholder.token();
    match source.matches(token).count() {
        0 => Err(TemplateError::Missing {
            template: source.to_owned(),
            placeholder,
        }),
        1 => source.find(token).ok_or_else(|| TemplateError::Missing {
            template: source.to_owned(),
            placeholder,
        }),
        count => Err(TemplateError::Repeated {
            template: source.to_owned(),
            placeholder,
            count,
        }),
    }
}

/// Render an ad-hoc template in one step.
///
/// # Errors
///
/// Returns [`TemplateError`] when the template is malformed.
pub fn render_template(source: &str, greeting: &str, name: &str) -> Result<String, TemplateError> {
    GreetingTemplate::parse(source).map(|template| template.render(greeting, name))
}

/// Render the greeting sentence for `name` using a resolved bundle.
///
/// The name is trimmed before substitution.
///
/// # Examples
///
/// ```rust
/// use greeter::greeting::format_greeting;
/// use greeter::locale_resolution::LocaleResolver;
///
/// let resolver = LocaleResolver::builtin()?;
/// let japan = resolver.resolve("japan");
/// assert_eq!(format_greeting(japan.bundle(), "Mika"), "こんにちは、Mikaさん！");
/// # Ok::<(), greeter::locale::TableError>(())
/// ```
#[must_use]
pub fn format_greeting(bundle: &LocaleBundle, name: &str) -> String {
    bundle
        .greeting_template
        .render(bundle.greeting_word, name.trim())
}
