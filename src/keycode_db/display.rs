//! Binding directive parsing for diagram legends.
//!
//! A ZMK binding such as `&mt LGUI A` or `&lt NAV ESC` is reduced to the one
//! keycode the finger actually lands on. Layer and modifier roles are
//! dropped on purpose: the diagram shows physical keys, not behaviors.

use super::SymbolTable;

/// One binding directive, classified by shape.
///
/// Classification is first-match-wins on the trimmed directive text, in the
/// order the variants are listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `&trans` - falls through to the layer below
    Transparent,
    /// `&lt LAYER KEY` - tap for KEY, hold for LAYER
    LayerTap {
        /// Layer identifier (second token), if present
        layer: Option<&'a str>,
        /// Tapped keycode (third token), if present
        key: Option<&'a str>,
    },
    /// `&mo LAYER` - momentary layer switch
    MomentaryLayer,
    /// `&mt MOD KEY` - tap for KEY, hold for MOD
    ModTap {
        /// Modifier identifier (second token), if present
        modifier: Option<&'a str>,
        /// Tapped keycode (third token), if present
        key: Option<&'a str>,
    },
    /// `&kp KEYCODE` - plain key press; KEYCODE may be compound (`RA(A)`)
    KeyPress(&'a str),
    /// `&sys_reset`
    Reset,
    /// `&bootloader`
    Bootloader,
    /// `&bt COMMAND [ARGS]` - Bluetooth profile command
    Bluetooth(&'a str),
    /// `&out COMMAND` - output selection command
    Output(&'a str),
    /// Anything else (custom behaviors, `&none`, macros, ...)
    Unknown,
}

impl<'a> Directive<'a> {
    /// Classifies a directive string.
    ///
    /// # Examples
    ///
    /// ```
    /// use keymapdoc::keycode_db::Directive;
    ///
    /// assert_eq!(Directive::parse("&kp RA(A)"), Directive::KeyPress("RA(A)"));
    /// assert_eq!(Directive::parse("  &trans "), Directive::Transparent);
    /// assert_eq!(Directive::parse("&caps_word"), Directive::Unknown);
    /// ```
    #[must_use]
    pub fn parse(directive: &'a str) -> Self {
        let directive = directive.trim();

        if directive == "&trans" {
            return Self::Transparent;
        }

        if directive.starts_with("&lt ") {
            let mut tokens = directive.split_whitespace().skip(1);
            return Self::LayerTap {
                layer: tokens.next(),
                key: tokens.next(),
            };
        }

        if directive.starts_with("&mo ") {
            return Self::MomentaryLayer;
        }

        if directive.starts_with("&mt ") {
            let mut tokens = directive.split_whitespace().skip(1);
            return Self::ModTap {
                modifier: tokens.next(),
                key: tokens.next(),
            };
        }

        if let Some(keycode) = directive.strip_prefix("&kp ") {
            return Self::KeyPress(keycode.trim());
        }

        if directive.starts_with("&sys_reset") {
            return Self::Reset;
        }
        if directive.starts_with("&bootloader") {
            return Self::Bootloader;
        }

        if directive.starts_with("&bt ") {
            return Self::Bluetooth(second_token(directive));
        }
        if directive.starts_with("&out ") {
            return Self::Output(second_token(directive));
        }

        Self::Unknown
    }

    /// Derives the short legend for this directive.
    ///
    /// Never fails; shapes with nothing worth printing yield an empty label.
    #[must_use]
    pub fn label<'s>(&self, table: &'s SymbolTable) -> &'s str
    where
        'a: 's,
    {
        match *self {
            Self::Transparent | Self::MomentaryLayer | Self::Unknown => "",
            // Resolved as if the tapped key were pressed directly
            Self::LayerTap { key: Some(key), .. } => Self::KeyPress(key).label(table),
            Self::LayerTap { key: None, .. } => "",
            Self::ModTap { key: Some(key), .. } => table.label(key),
            Self::ModTap { key: None, .. } => "",
            Self::KeyPress(keycode) => table.label(keycode),
            Self::Reset => "RESET",
            Self::Bootloader => "BOOTLOAD",
            Self::Bluetooth(command) | Self::Output(command) => table.label(command),
        }
    }
}

impl SymbolTable {
    /// Resolves a binding directive to its diagram legend.
    ///
    /// This is a pure function of the directive text and the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use keymapdoc::keycode_db::SymbolTable;
    ///
    /// let table = SymbolTable::load().unwrap();
    /// assert_eq!(table.resolve("&mt LGUI A"), "A");
    /// assert_eq!(table.resolve("&lt NAV SPACE"), "SPC");
    /// assert_eq!(table.resolve("&mo 2"), "");
    /// ```
    #[must_use]
    pub fn resolve(&self, directive: &str) -> String {
        Directive::parse(directive).label(self).to_owned()
    }
}

/// Second whitespace-separated token, or "" when there is none.
fn second_token(directive: &str) -> &str {
    directive.split_whitespace().nth(1).unwrap_or("")
}
