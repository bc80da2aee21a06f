//! Constructor names the generator expects elm-css to export.
//!
//! The declaration transpiler derives constructor names mechanically
//! (`border` with three tokens → `Css.border3`). When a vocabulary is
//! configured, a derived name missing from it is routed to `Css.property`
//! instead of producing a reference that won't compile.

use std::collections::HashSet;

/// Property constructors of elm-css that Tailwind's utilities lean on,
/// including the arity-suffixed shorthands.
const ELM_CSS_CONSTRUCTORS: &[&str] = &[
    "alignItems",
    "alignSelf",
    "backgroundAttachment",
    "backgroundClip",
    "backgroundColor",
    "backgroundImage",
    "backgroundOrigin",
    "backgroundRepeat",
    "backgroundRepeat2",
    "backgroundSize",
    "backgroundSize2",
    "border",
    "border2",
    "border3",
    "borderBottom",
    "borderBottom2",
    "borderBottom3",
    "borderBottomColor",
    "borderBottomLeftRadius",
    "borderBottomLeftRadius2",
    "borderBottomRightRadius",
    "borderBottomRightRadius2",
    "borderBottomStyle",
    "borderBottomWidth",
    "borderCollapse",
    "borderColor",
    "borderColor2",
    "borderColor3",
    "borderColor4",
    "borderLeft",
    "borderLeft2",
    "borderLeft3",
    "borderLeftColor",
    "borderLeftStyle",
    "borderLeftWidth",
    "borderRadius",
    "borderRadius2",
    "borderRadius3",
    "borderRadius4",
    "borderRight",
    "borderRight2",
    "borderRight3",
    "borderRightColor",
    "borderRightStyle",
    "borderRightWidth",
    "borderSpacing",
    "borderSpacing2",
    "borderStyle",
    "borderTop",
    "borderTop2",
    "borderTop3",
    "borderTopColor",
    "borderTopLeftRadius",
    "borderTopLeftRadius2",
    "borderTopRightRadius",
    "borderTopRightRadius2",
    "borderTopStyle",
    "borderTopWidth",
    "borderWidth",
    "borderWidth2",
    "borderWidth3",
    "borderWidth4",
    "bottom",
    "boxSizing",
    "color",
    "cursor",
    "display",
    "displayFlex",
    "fill",
    "flexBasis",
    "flexDirection",
    "flexGrow",
    "flexShrink",
    "flexWrap",
    "fontSize",
    "fontStyle",
    "fontWeight",
    "height",
    "justifyContent",
    "left",
    "letterSpacing",
    "lineHeight",
    "listStylePosition",
    "listStyleType",
    "margin",
    "margin2",
    "margin3",
    "margin4",
    "marginBottom",
    "marginLeft",
    "marginRight",
    "marginTop",
    "maxHeight",
    "maxWidth",
    "minHeight",
    "minWidth",
    "opacity",
    "order",
    "outline",
    "outlineOffset",
    "overflow",
    "overflowX",
    "overflowY",
    "padding",
    "padding2",
    "padding3",
    "padding4",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "pointerEvents",
    "position",
    "resize",
    "right",
    "tableLayout",
    "textAlign",
    "textDecoration",
    "textDecoration2",
    "textDecoration3",
    "textOverflow",
    "textTransform",
    "top",
    "transform",
    "verticalAlign",
    "visibility",
    "whiteSpace",
    "width",
    "zIndex",
];

/// Set of constructor names known to exist in the target style library
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    names: HashSet<String>,
}

impl Vocabulary {
    /// The elm-css constructors the generator relies on
    pub fn elm_css() -> Self {
        Self::from_names(ELM_CSS_CONSTRUCTORS.iter().copied())
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
