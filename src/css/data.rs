//! Stylesheet vocabulary used for completion, hover and validation.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use lightningcss::properties::PropertyId;

/// A CSS property with documentation.
#[derive(Debug, Clone)]
pub struct PropertyDef {
    /// Property name (e.g., "color")
    pub name: &'static str,
    /// Value syntax (e.g., "<color>")
    pub syntax: &'static str,
    /// Description of what the property does
    pub description: &'static str,
    /// Keyword values offered in value completion
    pub values: &'static [&'static str],
    /// Whether named colors are valid values
    pub accepts_color: bool,
}

/// A documented vocabulary entry without a value syntax: pseudo selectors,
/// directives.
#[derive(Debug, Clone)]
pub struct EntryDef {
    pub name: &'static str,
    pub description: &'static str,
}

/// A SCSS built-in function.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    pub name: &'static str,
    pub signature: &'static str,
    pub description: &'static str,
}

const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// Known CSS properties in completion order.
pub static PROPERTIES: &[PropertyDef] = &[
    PropertyDef {
        name: "align-content",
        syntax: "normal | <baseline-position> | <content-distribution> | <overflow-position>? <content-position>",
        description: "Aligns a flex container's lines within the flex container when there is extra space in the cross-axis.",
        values: &[
            "center", "flex-start", "flex-end", "space-between", "space-around", "space-evenly",
            "stretch",
        ],
        accepts_color: false,
    },
    PropertyDef {
        name: "align-items",
        syntax: "normal | stretch | <baseline-position> | [ <overflow-position>? <self-position> ]",
        description: "Aligns flex items along the cross axis of the current line of the flex container.",
        values: &["baseline", "center", "flex-start", "flex-end", "stretch"],
        accepts_color: false,
    },
    PropertyDef {
        name: "align-self",
        syntax: "auto | normal | stretch | <baseline-position> | <overflow-position>? <self-position>",
        description: "Allows the default alignment to be overridden for individual flex items.",
        values: &["auto", "baseline", "center", "flex-start", "flex-end", "stretch"],
        accepts_color: false,
    },
    PropertyDef {
        name: "animation",
        syntax: "<single-animation>#",
        description: "Shorthand property combines six of the animation properties into a single property.",
        values: &["none", "infinite", "alternate", "forwards", "backwards", "both"],
        accepts_color: false,
    },
    PropertyDef {
        name: "background",
        syntax: "[ <bg-layer> , ]* <final-bg-layer>",
        description: "Shorthand property for setting most background properties at the same place in the style sheet.",
        values: &[
            "none", "no-repeat", "repeat", "repeat-x", "repeat-y", "center", "cover", "contain",
        ],
        accepts_color: true,
    },
    PropertyDef {
        name: "background-color",
        syntax: "<color>",
        description: "Sets the background color of an element.",
        values: &["transparent", "currentColor"],
        accepts_color: true,
    },
    PropertyDef {
        name: "background-image",
        syntax: "<bg-image>#",
        description: "Sets the background image(s) of an element.",
        values: &["none"],
        accepts_color: false,
    },
    PropertyDef {
        name: "background-position",
        syntax: "<bg-position>#",
        description: "Specifies the initial position of the background image(s).",
        values: &["left", "center", "right", "top", "bottom"],
        accepts_color: false,
    },
    PropertyDef {
        name: "background-size",
        syntax: "<bg-size>#",
        description: "Specifies the size of the background images.",
        values: &["auto", "contain", "cover"],
        accepts_color: false,
    },
    PropertyDef {
        name: "border",
        syntax: "<line-width> || <line-style> || <color>",
        description: "Shorthand property for setting border width, style, and color.",
        values: BORDER_STYLES,
        accepts_color: true,
    },
    PropertyDef {
        name: "border-bottom",
        syntax: "<line-width> || <line-style> || <color>",
        description: "Shorthand property for setting border width, style and color.",
        values: BORDER_STYLES,
        accepts_color: true,
    },
    PropertyDef {
        name: "border-color",
        syntax: "<color>{1,4}",
        description: "The color of the border around all four edges of an element.",
        values: &["transparent", "currentColor"],
        accepts_color: true,
    },
    PropertyDef {
        name: "border-left",
        syntax: "<line-width> || <line-style> || <color>",
        description: "Shorthand property for setting border width, style and color.",
        values: BORDER_STYLES,
        accepts_color: true,
    },
    PropertyDef {
        name: "border-radius",
        syntax: "<length-percentage>{1,4} [ / <length-percentage>{1,4} ]?",
        description: "Defines the radii of the outer border edge.",
        values: &[],
        accepts_color: false,
    },
    PropertyDef {
        name: "border-right",
        syntax: "<line-width> || <line-style> || <color>",
        description: "Shorthand property for setting border width, style and color.",
        values: BORDER_STYLES,
        accepts_color: true,
    },
    PropertyDef {
        name: "border-style",
        syntax: "<line-style>{1,4}",
        description: "The style of the border around edges of an element.",
        values: BORDER_STYLES,
        accepts_color: false,
    },
    PropertyDef {
        name: "border-top",
        syntax: "<line-width> || <line-style> || <color>",
        description: "Shorthand property for setting border width, style and color.",
        values: BORDER_STYLES,
        accepts_color: true,
    },
    PropertyDef {
        name: "border-width",
        syntax: "<line-width>{1,4}",
        description: "Shorthand that sets the four border-*-width properties.",
        values: &["thin", "medium", "thick"],
        accepts_color: false,
    },
    PropertyDef {
        name: "bottom",
        syntax: "<length> | <percentage> | auto",
        description: "Specifies how far an absolutely positioned box's bottom margin edge is offset above the bottom edge of the box's containing block.",
        values: &["auto"],
        accepts_color: false,
    },
    PropertyDef {
        name: "box-shadow",
        syntax: "none | <shadow>#",
        description: "Attaches one or more drop-shadows to the box.",
        values: &["none", "inset"],
        accepts_color: true,
    },
    PropertyDef {
        name: "box-sizing",
        syntax: "content-box | border-box",
        description: "Specifies the behavior of the 'width' and 'height' properties.",
        values: &["content-box", "border-box"],
        accepts_color: false,
    },
    PropertyDef {
        name: "color",
        syntax: "<color>",
        description: "Sets the color of an element's text.",
        values: &["currentColor", "transparent"],
        accepts_color: true,
    },
    PropertyDef {
        name: "content",
        syntax: "normal | none | [ <content-replacement> | <content-list> ] [/ <string> ]?",
        description: "Determines which page-based occurrence of a given element is applied to a counter or string value.",
        values: &["normal", "none", "attr()", "counter()"],
        accepts_color: false,
    },
    PropertyDef {
        name: "cursor",
        syntax: "[ [ <url> [ <x> <y> ]? , ]* <cursor-keyword> ]",
        description: "Allows control over cursor appearance in an element.",
        values: &[
            "auto", "default", "pointer", "text", "move", "not-allowed", "grab", "wait", "help",
            "crosshair",
        ],
        accepts_color: false,
    },
    PropertyDef {
        name: "display",
        syntax: "[ <display-outside> || <display-inside> ] | <display-listitem> | <display-internal> | <display-box> | <display-legacy>",
        description: "In combination with 'float' and 'position', determines the type of box or boxes that are generated for an element.",
        values: &[
            "block", "inline", "inline-block", "flex", "inline-flex", "grid", "inline-grid",
            "contents", "none", "table",
        ],
        accepts_color: false,
    },
    PropertyDef {
        name: "fill",
        syntax: "<paint>",
        description: "Paints the interior of the given graphical element.",
        values: &["none"],
        accepts_color: true,
    },
    PropertyDef {
        name: "flex",
        syntax: "none | [ <'flex-grow'> <'flex-shrink'>? || <'flex-basis'> ]",
        description: "Specifies the components of a flexible length.",
        values: &["none", "auto"],
        accepts_color: false,
    },
    PropertyDef {
        name: "flex-basis",
        syntax: "content | <'width'>",
        description: "Sets the flex basis.",
        values: &["auto", "content"],
        accepts_color: false,
    },
    PropertyDef {
        name: "flex-direction",
        syntax: "row | row-reverse | column | column-reverse",
        description: "Specifies how flex items are placed in the flex container.",
        values: &["row", "row-reverse", "column", "column-reverse"],
        accepts_color: false,
    },
    PropertyDef {
        name: "flex-grow",
        syntax: "<number>",
        description: "Sets the flex grow factor.",
        values: &[],
        accepts_color: false,
    },
    PropertyDef {
        name: "flex-shrink",
        syntax: "<number>",
        description: "Sets the flex shrink factor.",
        values: &[],
        accepts_color: false,
    },
    PropertyDef {
        name: "flex-wrap",
        syntax: "nowrap | wrap | wrap-reverse",
        description: "Controls whether the flex container is single-line or multi-line.",
        values: &["nowrap", "wrap", "wrap-reverse"],
        accepts_color: false,
    },
    PropertyDef {
        name: "float",
        syntax: "left | right | none | inline-start | inline-end",
        description: "Specifies how a box should be floated.",
        values: &["left", "right", "none"],
        accepts_color: false,
    },
    PropertyDef {
        name: "font",
        syntax: "[ [ <'font-style'> || <font-variant-css21> || <'font-weight'> || <'font-stretch'> ]? <'font-size'> [ / <'line-height'> ]? <'font-family'> ] | caption | icon | menu | message-box | small-caption | status-bar",
        description: "Shorthand property for setting font properties.",
        values: &["caption", "icon", "menu", "message-box", "small-caption", "status-bar"],
        accepts_color: false,
    },
    PropertyDef {
        name: "font-family",
        syntax: "<family-name>#",
        description: "Specifies a prioritized list of font family names or generic family names.",
        values: &["serif", "sans-serif", "monospace", "cursive", "fantasy", "system-ui"],
        accepts_color: false,
    },
    PropertyDef {
        name: "font-size",
        syntax: "<absolute-size> | <relative-size> | <length-percentage>",
        description: "Indicates the desired height of glyphs from the font.",
        values: &["small", "medium", "large", "x-large", "larger", "smaller"],
        accepts_color: false,
    },
    PropertyDef {
        name: "font-style",
        syntax: "normal | italic | oblique <angle>?",
        description: "Allows italic or oblique faces to be selected.",
        values: &["normal", "italic", "oblique"],
        accepts_color: false,
    },
    PropertyDef {
        name: "font-weight",
        syntax: "<font-weight-absolute> | bolder | lighter",
        description: "Specifies weight of glyphs in the font.",
        values: &["normal", "bold", "bolder", "lighter", "100", "400", "700", "900"],
        accepts_color: false,
    },
    PropertyDef {
        name: "gap",
        syntax: "<'row-gap'> <'column-gap'>?",
        description: "Shorthand for row-gap and column-gap.",
        values: &[],
        accepts_color: false,
    },
    PropertyDef {
        name: "grid-template-columns",
        syntax: "none | <track-list> | <auto-track-list>",
        description: "Specifies a grid track's sizing functions for columns.",
        values: &["none", "auto", "min-content", "max-content", "repeat()"],
        accepts_color: false,
    },
    PropertyDef {
        name: "grid-template-rows",
        syntax: "none | <track-list> | <auto-track-list>",
        description: "Specifies a grid track's sizing functions for rows.",
        values: &["none", "auto", "min-content", "max-content", "repeat()"],
        accepts_color: false,
    },
    PropertyDef {
        name: "height",
        syntax: "<viewport-length>{1,2}",
        description: "Specifies the height of the content area of a box.",
        values: &["auto", "fit-content", "max-content", "min-content"],
        accepts_color: false,
    },
    PropertyDef {
        name: "justify-content",
        syntax: "normal | <content-distribution> | <overflow-position>? [ <content-position> | left | right ]",
        description: "Aligns flex items along the main axis of the current line of the flex container.",
        values: &[
            "center", "flex-start", "flex-end", "space-between", "space-around", "space-evenly",
        ],
        accepts_color: false,
    },
    PropertyDef {
        name: "left",
        syntax: "<length> | <percentage> | auto",
        description: "Specifies how far an absolutely positioned box's left margin edge is offset to the right of the left edge of the box's containing block.",
        values: &["auto"],
        accepts_color: false,
    },
    PropertyDef {
        name: "letter-spacing",
        syntax: "normal | <length>",
        description: "Specifies the minimum, maximum, and optimal spacing between grapheme clusters.",
        values: &["normal"],
        accepts_color: false,
    },
    PropertyDef {
        name: "line-height",
        syntax: "normal | <number> | <length> | <percentage>",
        description: "Determines the block-progression dimension of the text content area of an inline box.",
        values: &["normal"],
        accepts_color: false,
    },
    PropertyDef {
        name: "list-style",
        syntax: "<'list-style-type'> || <'list-style-position'> || <'list-style-image'>",
        description: "Shorthand for setting 'list-style-type', 'list-style-position' and 'list-style-image'.",
        values: &["none", "disc", "circle", "square", "decimal", "inside", "outside"],
        accepts_color: false,
    },
    PropertyDef {
        name: "margin",
        syntax: "[ <length> | <percentage> | auto ]{1,4}",
        description: "Shorthand property to set values for the thickness of the margin area.",
        values: &["auto"],
        accepts_color: false,
    },
    PropertyDef {
        name: "margin-bottom",
        syntax: "<length> | <percentage> | auto",
        description: "Shorthand property to set values for the thickness of the margin area.",
        values: &["auto"],
        accepts_color: false,
    },
    PropertyDef {
        name: "margin-left",
        syntax: "<length> | <percentage> | auto",
        description: "Shorthand property to set values for the thickness of the margin area.",
        values: &["auto"],
        accepts_color: false,
    },
    PropertyDef {
        name: "margin-right",
        syntax: "<length> | <percentage> | auto",
        description: "Shorthand property to set values for the thickness of the margin area.",
        values: &["auto"],
        accepts_color: false,
    },
    PropertyDef {
        name: "margin-top",
        syntax: "<length> | <percentage> | auto",
        description: "Shorthand property to set values for the thickness of the margin area.",
        values: &["auto"],
        accepts_color: false,
    },
    PropertyDef {
        name: "max-height",
        syntax: "<viewport-length>",
        description: "Allows authors to constrain content height to a certain range.",
        values: &["none", "fit-content", "max-content", "min-content"],
        accepts_color: false,
    },
    PropertyDef {
        name: "max-width",
        syntax: "<viewport-length>",
        description: "Allows authors to constrain content width to a certain range.",
        values: &["none", "fit-content", "max-content", "min-content"],
        accepts_color: false,
    },
    PropertyDef {
        name: "min-height",
        syntax: "<viewport-length>",
        description: "Allows authors to constrain content height to a certain range.",
        values: &["auto", "fit-content", "max-content", "min-content"],
        accepts_color: false,
    },
    PropertyDef {
        name: "min-width",
        syntax: "<viewport-length>",
        description: "Allows authors to constrain content width to a certain range.",
        values: &["auto", "fit-content", "max-content", "min-content"],
        accepts_color: false,
    },
    PropertyDef {
        name: "opacity",
        syntax: "<alpha-value>",
        description: "Opacity of an element's text, where 1 is opaque and 0 is entirely transparent.",
        values: &[],
        accepts_color: false,
    },
    PropertyDef {
        name: "outline",
        syntax: "[ <'outline-color'> || <'outline-style'> || <'outline-width'> ]",
        description: "Shorthand property for 'outline-style', 'outline-width', and 'outline-color'.",
        values: &["none", "auto", "invert"],
        accepts_color: true,
    },
    PropertyDef {
        name: "overflow",
        syntax: "[ visible | hidden | clip | scroll | auto ]{1,2}",
        description: "Shorthand for setting 'overflow-x' and 'overflow-y'.",
        values: &["visible", "hidden", "clip", "scroll", "auto"],
        accepts_color: false,
    },
    PropertyDef {
        name: "padding",
        syntax: "[ <length> | <percentage> ]{1,4}",
        description: "Shorthand property to set values for the thickness of the padding area.",
        values: &[],
        accepts_color: false,
    },
    PropertyDef {
        name: "padding-bottom",
        syntax: "<length> | <percentage>",
        description: "Shorthand property to set values for the thickness of the padding area.",
        values: &[],
        accepts_color: false,
    },
    PropertyDef {
        name: "padding-left",
        syntax: "<length> | <percentage>",
        description: "Shorthand property to set values for the thickness of the padding area.",
        values: &[],
        accepts_color: false,
    },
    PropertyDef {
        name: "padding-right",
        syntax: "<length> | <percentage>",
        description: "Shorthand property to set values for the thickness of the padding area.",
        values: &[],
        accepts_color: false,
    },
    PropertyDef {
        name: "padding-top",
        syntax: "<length> | <percentage>",
        description: "Shorthand property to set values for the thickness of the padding area.",
        values: &[],
        accepts_color: false,
    },
    PropertyDef {
        name: "pointer-events",
        syntax: "auto | none | visiblePainted | visibleFill | visibleStroke | visible | painted | fill | stroke | all",
        description: "Specifies under what circumstances a given element can be the target element for a pointer event.",
        values: &["auto", "none", "all"],
        accepts_color: false,
    },
    PropertyDef {
        name: "position",
        syntax: "static | relative | absolute | sticky | fixed",
        description: "The position CSS property sets how an element is positioned in a document.",
        values: &["static", "relative", "absolute", "sticky", "fixed"],
        accepts_color: false,
    },
    PropertyDef {
        name: "right",
        syntax: "<length> | <percentage> | auto",
        description: "Specifies how far an absolutely positioned box's right margin edge is offset to the left of the right edge of the box's containing block.",
        values: &["auto"],
        accepts_color: false,
    },
    PropertyDef {
        name: "stroke",
        syntax: "<paint>",
        description: "Paints along the outline of the given graphical element.",
        values: &["none"],
        accepts_color: true,
    },
    PropertyDef {
        name: "text-align",
        syntax: "start | end | left | right | center | justify | match-parent",
        description: "Describes how inline contents of a block are horizontally aligned if the contents do not completely fill the line box.",
        values: &["start", "end", "left", "right", "center", "justify"],
        accepts_color: false,
    },
    PropertyDef {
        name: "text-decoration",
        syntax: "<'text-decoration-line'> || <'text-decoration-style'> || <'text-decoration-color'>",
        description: "Decorations applied to font used for an element's text.",
        values: &["none", "underline", "overline", "line-through"],
        accepts_color: true,
    },
    PropertyDef {
        name: "text-overflow",
        syntax: "[ clip | ellipsis | <string> ]{1,2}",
        description: "Text can overflow for example when it is prevented from wrapping.",
        values: &["clip", "ellipsis"],
        accepts_color: false,
    },
    PropertyDef {
        name: "text-transform",
        syntax: "none | capitalize | uppercase | lowercase | full-width | full-size-kana",
        description: "Controls capitalization effects of an element's text.",
        values: &["none", "capitalize", "uppercase", "lowercase"],
        accepts_color: false,
    },
    PropertyDef {
        name: "top",
        syntax: "<length> | <percentage> | auto",
        description: "Specifies how far an absolutely positioned box's top margin edge is offset below the top edge of the box's containing block.",
        values: &["auto"],
        accepts_color: false,
    },
    PropertyDef {
        name: "transform",
        syntax: "none | <transform-list>",
        description: "A two-dimensional transformation is applied to an element through the 'transform' property.",
        values: &["none", "translate()", "rotate()", "scale()"],
        accepts_color: false,
    },
    PropertyDef {
        name: "transition",
        syntax: "<single-transition>#",
        description: "Shorthand property combines four of the transition properties into a single property.",
        values: &["none", "all", "ease", "ease-in", "ease-out", "ease-in-out", "linear"],
        accepts_color: false,
    },
    PropertyDef {
        name: "user-select",
        syntax: "auto | text | none | contain | all",
        description: "Controls the appearance of selection.",
        values: &["auto", "text", "none", "contain", "all"],
        accepts_color: false,
    },
    PropertyDef {
        name: "vertical-align",
        syntax: "baseline | sub | super | text-top | text-bottom | middle | top | bottom | <percentage> | <length>",
        description: "Affects the vertical positioning of the inline boxes generated by an inline-level element inside a line box.",
        values: &["baseline", "sub", "super", "text-top", "text-bottom", "middle", "top", "bottom"],
        accepts_color: false,
    },
    PropertyDef {
        name: "visibility",
        syntax: "visible | hidden | collapse",
        description: "Specifies whether the boxes generated by an element are rendered.",
        values: &["visible", "hidden", "collapse"],
        accepts_color: false,
    },
    PropertyDef {
        name: "white-space",
        syntax: "normal | pre | nowrap | pre-wrap | pre-line | break-spaces",
        description: "Specifies how whitespace is handled in an element.",
        values: &["normal", "pre", "nowrap", "pre-wrap", "pre-line", "break-spaces"],
        accepts_color: false,
    },
    PropertyDef {
        name: "width",
        syntax: "<viewport-length>{1,2}",
        description: "Specifies the width of the content area, padding area or border area of certain boxes.",
        values: &["auto", "fit-content", "max-content", "min-content"],
        accepts_color: false,
    },
    PropertyDef {
        name: "z-index",
        syntax: "auto | <integer>",
        description: "For a positioned box, the 'z-index' property specifies the stack level of the box in the current stacking context.",
        values: &["auto"],
        accepts_color: false,
    },
];

static PROPERTY_INDEX: LazyLock<HashMap<&'static str, &'static PropertyDef>> =
    LazyLock::new(|| PROPERTIES.iter().map(|p| (p.name, p)).collect());

/// Look up a property by name. Names are case-insensitive in CSS.
pub fn get_property(name: &str) -> Option<&'static PropertyDef> {
    PROPERTY_INDEX
        .get(name)
        .or_else(|| PROPERTY_INDEX.get(name.to_ascii_lowercase().as_str()))
        .copied()
}

/// Standard properties recognised without documentation, beyond those
/// lightningcss models.
const UNDOCUMENTED_PROPERTIES: &[&str] = &[
    "object-fit", "object-position", "will-change", "touch-action",
    "counter-increment", "counter-reset", "counter-set", "quotes", "resize",
    "scroll-behavior", "scroll-margin", "scroll-margin-top", "scroll-margin-bottom",
    "scroll-margin-left", "scroll-margin-right", "scroll-padding", "scroll-padding-top",
    "scroll-padding-bottom", "scroll-padding-left", "scroll-padding-right", "scroll-snap-type",
    "scroll-snap-align", "scroll-snap-stop", "overscroll-behavior", "overscroll-behavior-x",
    "overscroll-behavior-y", "overflow-wrap", "overflow-anchor", "overflow-clip-margin",
    "word-break", "word-wrap", "word-spacing", "hyphens", "tab-size", "text-indent", "text-justify",
    "text-rendering", "text-underline-offset", "text-underline-position",
    "text-decoration-thickness", "text-orientation", "writing-mode", "direction", "unicode-bidi",
    "table-layout", "border-collapse", "border-spacing", "caption-side", "empty-cells",
    "list-style-type", "list-style-position", "list-style-image", "columns", "column-count",
    "column-width", "column-rule", "column-rule-color", "column-rule-style", "column-rule-width",
    "column-span", "column-fill", "break-before", "break-after", "break-inside",
    "page-break-before", "page-break-after", "page-break-inside", "orphans", "widows", "isolation",
    "mix-blend-mode", "background-blend-mode", "backdrop-filter", "filter", "clip", "clip-path",
    "mask", "mask-image", "mask-size", "mask-position", "mask-repeat", "shape-outside",
    "shape-margin", "shape-image-threshold", "caret-color", "accent-color", "appearance",
    "color-scheme", "contain", "content-visibility", "container", "container-name",
    "container-type", "aspect-ratio", "inset", "inset-block", "inset-inline", "inset-block-start",
    "inset-block-end", "inset-inline-start", "inset-inline-end", "row-gap", "column-gap", "order",
    "place-items", "place-content", "place-self", "justify-items", "justify-self", "grid",
    "grid-area", "grid-row", "grid-column", "grid-row-start", "grid-row-end", "grid-column-start",
    "grid-column-end", "grid-template", "grid-template-areas", "grid-auto-flow", "grid-auto-rows",
    "grid-auto-columns", "grid-gap", "grid-row-gap", "grid-column-gap", "overflow-x", "overflow-y",
    "text-shadow", "font-variant", "font-variant-numeric", "font-variant-caps",
    "font-variant-ligatures", "font-feature-settings", "font-variation-settings", "font-kerning",
    "font-stretch", "font-display", "font-optical-sizing", "font-size-adjust", "font-synthesis",
    "line-break", "text-align-last", "text-decoration-line", "text-decoration-style",
    "text-decoration-color", "text-emphasis", "text-size-adjust", "text-wrap",
    "white-space-collapse", "hanging-punctuation", "transform-origin", "transform-style",
    "transform-box", "translate", "rotate", "scale", "perspective", "perspective-origin",
    "backface-visibility", "transition-property", "transition-duration",
    "transition-timing-function", "transition-delay", "animation-name", "animation-duration",
    "animation-timing-function", "animation-delay", "animation-iteration-count",
    "animation-direction", "animation-fill-mode", "animation-play-state", "background-repeat",
    "background-attachment", "background-clip", "background-origin", "border-top-color",
    "border-right-color", "border-bottom-color", "border-left-color", "border-top-style",
    "border-right-style", "border-bottom-style", "border-left-style", "border-top-width",
    "border-right-width", "border-bottom-width", "border-left-width", "border-top-left-radius",
    "border-top-right-radius", "border-bottom-left-radius", "border-bottom-right-radius",
    "border-image", "border-image-source", "border-image-slice", "border-image-width",
    "border-image-outset", "border-image-repeat", "outline-color", "outline-style", "outline-width",
    "outline-offset", "box-decoration-break", "clear", "image-rendering", "image-orientation",
    "margin-block", "margin-inline", "margin-block-start", "margin-block-end",
    "margin-inline-start", "margin-inline-end", "padding-block", "padding-inline",
    "padding-block-start", "padding-block-end", "padding-inline-start", "padding-inline-end",
    "block-size", "inline-size", "min-block-size", "max-block-size", "min-inline-size",
    "max-inline-size", "all", "stroke-width", "stroke-linecap", "stroke-linejoin",
    "stroke-dasharray", "stroke-dashoffset", "stroke-opacity", "fill-opacity", "fill-rule",
    "vector-effect", "flex-flow", "line-clamp", "print-color-adjust", "forced-color-adjust",
    "anchor-name", "position-anchor", "view-transition-name", "zoom",
];

static UNDOCUMENTED_INDEX: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| UNDOCUMENTED_PROPERTIES.iter().copied().collect());

/// Whether `name` is a standard CSS property.
///
/// Documented properties are checked first, then the undocumented list, then
/// lightningcss, which maps every name it does not model to a custom property.
pub fn is_known_property(name: &str) -> bool {
    if get_property(name).is_some() {
        return true;
    }
    let name = name.to_ascii_lowercase();
    if UNDOCUMENTED_INDEX.contains(name.as_str()) {
        return true;
    }
    let known = !matches!(PropertyId::from(name.as_str()), PropertyId::Custom(_));
    known
}

/// Every property name offered as a rename target.
pub fn known_property_names() -> impl Iterator<Item = &'static str> {
    PROPERTIES
        .iter()
        .map(|p| p.name)
        .chain(UNDOCUMENTED_PROPERTIES.iter().copied())
}

/// Values valid for every property.
pub const GLOBAL_KEYWORDS: &[&str] = &["inherit", "initial", "unset", "revert"];

/// Named colors offered for color-accepting properties.
pub const NAMED_COLORS: &[&str] = &[
    "aqua", "black", "blue", "fuchsia", "gray", "green", "lime", "maroon", "navy", "olive",
    "orange", "purple", "red", "rebeccapurple", "silver", "teal", "white", "yellow",
];

/// Pseudo-classes and pseudo-elements offered in selector positions.
pub static PSEUDO_SELECTORS: &[EntryDef] = &[
    EntryDef {
        name: ":active",
        description: "Applies while an element is being activated by the user.",
    },
    EntryDef {
        name: ":checked",
        description: "Radio and checkbox elements can be toggled by the user.",
    },
    EntryDef {
        name: ":disabled",
        description: "Represents user interface elements that are in a disabled state.",
    },
    EntryDef {
        name: ":empty",
        description: "Represents an element that has no children at all.",
    },
    EntryDef {
        name: ":first-child",
        description: "Same as :nth-child(1). Represents an element that is the first child of some other element.",
    },
    EntryDef {
        name: ":focus",
        description: "Applies while an element has the focus.",
    },
    EntryDef {
        name: ":focus-visible",
        description: "Applies while an element matches :focus and the user agent determines focus should be made evident.",
    },
    EntryDef {
        name: ":focus-within",
        description: "Matches an element if it or any of its descendants have focus.",
    },
    EntryDef {
        name: ":hover",
        description: "Applies while the user designates an element with a pointing device, but does not necessarily activate it.",
    },
    EntryDef {
        name: ":last-child",
        description: "Same as :nth-last-child(1). Represents an element that is the last child of some other element.",
    },
    EntryDef {
        name: ":not",
        description: "The negation pseudo-class, :not(X), takes a simple selector as an argument.",
    },
    EntryDef {
        name: ":nth-child",
        description: "Represents an element that has an+b-1 siblings before it in the document tree.",
    },
    EntryDef {
        name: ":visited",
        description: "Applies once the link has been visited by the user.",
    },
    EntryDef {
        name: "::after",
        description: "Represents a styleable child pseudo-element immediately after the originating element's actual content.",
    },
    EntryDef {
        name: "::before",
        description: "Represents a styleable child pseudo-element immediately before the originating element's actual content.",
    },
    EntryDef {
        name: "::placeholder",
        description: "The placeholder text of an input field.",
    },
];

/// SCSS directives offered where a nested statement may start.
pub static SCSS_DIRECTIVES: &[EntryDef] = &[
    EntryDef {
        name: "@extend",
        description: "Inherits the styles of another selector.",
    },
    EntryDef {
        name: "@include",
        description: "Includes the styles defined by a mixin.",
    },
    EntryDef {
        name: "@media",
        description: "Applies the nested rules only when the media query matches.",
    },
    EntryDef {
        name: "@if",
        description: "Includes the nested rules only when the expression is truthy.",
    },
    EntryDef {
        name: "@each",
        description: "Repeats the nested rules for each element of a list or map.",
    },
];

/// SCSS built-in functions offered in value positions.
pub static SCSS_FUNCTIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "darken",
        signature: "darken($color, $amount)",
        description: "Makes a color darker.",
    },
    FunctionDef {
        name: "lighten",
        signature: "lighten($color, $amount)",
        description: "Makes a color lighter.",
    },
    FunctionDef {
        name: "mix",
        signature: "mix($color1, $color2, $weight: 50%)",
        description: "Mixes two colors together.",
    },
    FunctionDef {
        name: "rgba",
        signature: "rgba($color, $alpha)",
        description: "Changes the alpha component for a color.",
    },
    FunctionDef {
        name: "transparentize",
        signature: "transparentize($color, $amount)",
        description: "Makes a color more transparent.",
    },
    FunctionDef {
        name: "percentage",
        signature: "percentage($number)",
        description: "Converts a unitless number to a percentage.",
    },
    FunctionDef {
        name: "map-get",
        signature: "map-get($map, $key)",
        description: "Returns the value in a map associated with the given key.",
    },
    FunctionDef {
        name: "if",
        signature: "if($condition, $if-true, $if-false)",
        description: "Returns one of two values, depending on whether or not $condition is true.",
    },
];

/// Edit distance between two names, used to suggest fixes for misspelled
/// properties.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_lookup() {
        assert!(get_property("color").is_some());
        assert!(get_property("COLOR").is_some());
        assert!(get_property("colr").is_none());
    }

    #[test]
    fn common_properties_are_known() {
        for name in [
            "overflow-x", "grid-column", "text-shadow", "order", "object-fit", "row-gap",
            "filter", "aspect-ratio", "inset", "Color", "will-change",
        ] {
            assert!(is_known_property(name), "{name} should be known");
        }
        assert!(!is_known_property("colr"));
        assert!(!is_known_property("widht"));
    }

    #[test]
    fn undocumented_properties_are_unique_and_undocumented() {
        assert_eq!(UNDOCUMENTED_INDEX.len(), UNDOCUMENTED_PROPERTIES.len());
        assert!(UNDOCUMENTED_PROPERTIES.iter().all(|name| get_property(name).is_none()));
    }

    #[test]
    fn properties_are_unique() {
        assert_eq!(PROPERTY_INDEX.len(), PROPERTIES.len());
    }

    #[test]
    fn pseudo_selectors_start_with_colon() {
        assert!(PSEUDO_SELECTORS.iter().all(|p| p.name.starts_with(':')));
    }

    #[test]
    fn edit_distances() {
        assert_eq!(edit_distance("colr", "color"), 1);
        assert_eq!(edit_distance("color", "color"), 0);
        assert_eq!(edit_distance("", "top"), 3);
        assert_eq!(edit_distance("widht", "width"), 2);
    }
}
