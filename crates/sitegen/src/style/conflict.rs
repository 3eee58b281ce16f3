// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Utility-class conflict detection.
//!
//! A class token like `md:hover:bg-primary/90` is split into its modifiers
//! (`hover`, `md`), an important marker, and the base utility. The base
//! utility is mapped to the CSS property [`Group`] it sets. Two tokens with
//! equal modifiers and importance that set the same group conflict; a few
//! shorthand groups (`p-*`, `inset-*`, `gap-*`, ...) also replace their
//! longhands.
//!
//! Only the utilities the site actually uses, plus their close relatives, are
//! classified. Anything else returns `None` and is left alone.

/// The CSS property (or property family) a utility class sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Display,
    Position,
    Padding,
    PaddingX,
    PaddingY,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    PaddingStart,
    PaddingEnd,
    Margin,
    MarginX,
    MarginY,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    MarginStart,
    MarginEnd,
    Gap,
    GapX,
    GapY,
    SpaceX,
    SpaceY,
    Width,
    MinWidth,
    MaxWidth,
    Height,
    MinHeight,
    MaxHeight,
    Size,
    Inset,
    InsetX,
    InsetY,
    Top,
    Right,
    Bottom,
    Left,
    ZIndex,
    FlexDirection,
    FlexWrap,
    Flex,
    FlexGrow,
    FlexShrink,
    AlignItems,
    JustifyContent,
    AlignSelf,
    GridCols,
    GridRows,
    ColSpan,
    FontSize,
    FontWeight,
    FontFamily,
    TextAlign,
    TextColor,
    TextDecoration,
    TextTransform,
    UnderlineOffset,
    LineHeight,
    Tracking,
    BgColor,
    BgImage,
    BgSize,
    BgPosition,
    BgRepeat,
    GradientFrom,
    GradientVia,
    GradientTo,
    BorderWidth,
    BorderColor,
    BorderStyle,
    Rounded,
    Shadow,
    Opacity,
    Overflow,
    OverflowX,
    OverflowY,
    RingWidth,
    RingColor,
    RingOffsetWidth,
    RingOffsetColor,
    OutlineStyle,
    Transition,
    Duration,
    BackdropBlur,
    Fill,
    StrokeColor,
    StrokeWidth,
    ScrollMarginTop,
    Cursor,
}

impl Group {
    /// Longhand groups replaced when this shorthand is written later.
    fn longhands(self) -> &'static [Group] {
        use Group::*;
        match self {
            Padding => &[
                PaddingX,
                PaddingY,
                PaddingTop,
                PaddingRight,
                PaddingBottom,
                PaddingLeft,
                PaddingStart,
                PaddingEnd,
            ],
            PaddingX => &[PaddingRight, PaddingLeft, PaddingStart, PaddingEnd],
            PaddingY => &[PaddingTop, PaddingBottom],
            Margin => &[
                MarginX,
                MarginY,
                MarginTop,
                MarginRight,
                MarginBottom,
                MarginLeft,
                MarginStart,
                MarginEnd,
            ],
            MarginX => &[MarginRight, MarginLeft, MarginStart, MarginEnd],
            MarginY => &[MarginTop, MarginBottom],
            Gap => &[GapX, GapY],
            Size => &[Width, Height],
            Inset => &[InsetX, InsetY, Top, Right, Bottom, Left],
            InsetX => &[Right, Left],
            InsetY => &[Top, Bottom],
            Overflow => &[OverflowX, OverflowY],
            _ => &[],
        }
    }
}

/// What a class token competes on: modifiers, importance and property group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictKey {
    /// Sorted, `:`-joined modifiers (`"hover:md"`); empty for none
    pub modifiers: String,
    pub important: bool,
    pub group: Group,
}

impl ConflictKey {
    /// True when a token with this key, written later, replaces `earlier`.
    pub fn overrides(&self, earlier: &ConflictKey) -> bool {
        self.modifiers == earlier.modifiers
            && self.important == earlier.important
            && (self.group == earlier.group || self.group.longhands().contains(&earlier.group))
    }
}

/// Classify a single class token. Returns `None` for non-utility classes.
pub fn conflict_key(token: &str) -> Option<ConflictKey> {
    let mut parts = split_modifiers(token);
    let base = parts.pop()?;
    parts.sort_unstable();

    let (important, base) = strip_important(base);
    let base = base.strip_prefix('-').unwrap_or(base);
    if base.is_empty() {
        return None;
    }

    let group = classify(base)?;
    Some(ConflictKey {
        modifiers: parts.join(":"),
        important,
        group,
    })
}

/// Split on `:` outside of `[...]`, so `supports-[a:b]:flex` keeps its modifier whole.
fn split_modifiers(token: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in token.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                parts.push(&token[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&token[start..]);
    parts
}

fn strip_important(base: &str) -> (bool, &str) {
    if let Some(rest) = base.strip_prefix('!') {
        (true, rest)
    } else if let Some(rest) = base.strip_suffix('!') {
        (true, rest)
    } else {
        (false, base)
    }
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];
const ROUNDED_SIZES: &[&str] = &[
    "none", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "full",
];

fn classify(base: &str) -> Option<Group> {
    if let Some(group) = classify_keyword(base) {
        return Some(group);
    }
    for (prefix, group) in PREFIXES {
        if let Some(value) = base.strip_prefix(prefix) {
            return refine(*group, value);
        }
    }
    None
}

fn classify_keyword(base: &str) -> Option<Group> {
    use Group::*;
    let group = match base {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "inline-grid"
        | "hidden" | "contents" | "table" | "flow-root" => Display,
        "static" | "fixed" | "absolute" | "relative" | "sticky" => Position,
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => FlexDirection,
        "flex-wrap" | "flex-nowrap" | "flex-wrap-reverse" => FlexWrap,
        "flex-1" | "flex-auto" | "flex-initial" | "flex-none" => Flex,
        "grow" | "grow-0" | "flex-grow" | "flex-grow-0" => FlexGrow,
        "shrink" | "shrink-0" | "flex-shrink" | "flex-shrink-0" => FlexShrink,
        "underline" | "no-underline" | "line-through" | "overline" => TextDecoration,
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => TextTransform,
        "border" => BorderWidth,
        "rounded" => Rounded,
        "shadow" => Shadow,
        "ring" => RingWidth,
        "transition" | "transition-none" | "transition-all" | "transition-colors"
        | "transition-opacity" | "transition-shadow" | "transition-transform" => Transition,
        "outline-none" | "outline-hidden" | "outline" | "outline-dashed" | "outline-dotted" => {
            OutlineStyle
        }
        "backdrop-blur" => BackdropBlur,
        _ => return None,
    };
    Some(group)
}

/// Prefix table, longest prefixes first so `px-` is tried before `p-`.
const PREFIXES: &[(&str, Group)] = &[
    ("underline-offset-", Group::UnderlineOffset),
    ("ring-offset-", Group::RingOffsetWidth),
    ("scroll-mt-", Group::ScrollMarginTop),
    ("backdrop-blur-", Group::BackdropBlur),
    ("overflow-x-", Group::OverflowX),
    ("overflow-y-", Group::OverflowY),
    ("overflow-", Group::Overflow),
    ("grid-cols-", Group::GridCols),
    ("grid-rows-", Group::GridRows),
    ("col-span-", Group::ColSpan),
    ("space-x-", Group::SpaceX),
    ("space-y-", Group::SpaceY),
    ("inset-x-", Group::InsetX),
    ("inset-y-", Group::InsetY),
    ("inset-", Group::Inset),
    ("duration-", Group::Duration),
    ("tracking-", Group::Tracking),
    ("leading-", Group::LineHeight),
    ("opacity-", Group::Opacity),
    ("justify-", Group::JustifyContent),
    ("rounded-", Group::Rounded),
    ("shadow-", Group::Shadow),
    ("border-", Group::BorderWidth),
    ("stroke-", Group::StrokeWidth),
    ("cursor-", Group::Cursor),
    ("items-", Group::AlignItems),
    ("self-", Group::AlignSelf),
    ("gap-x-", Group::GapX),
    ("gap-y-", Group::GapY),
    ("gap-", Group::Gap),
    ("max-w-", Group::MaxWidth),
    ("min-w-", Group::MinWidth),
    ("max-h-", Group::MaxHeight),
    ("min-h-", Group::MinHeight),
    ("size-", Group::Size),
    ("font-", Group::FontWeight),
    ("text-", Group::TextColor),
    ("fill-", Group::Fill),
    ("from-", Group::GradientFrom),
    ("via-", Group::GradientVia),
    ("ring-", Group::RingWidth),
    ("top-", Group::Top),
    ("right-", Group::Right),
    ("bottom-", Group::Bottom),
    ("left-", Group::Left),
    ("bg-", Group::BgColor),
    ("to-", Group::GradientTo),
    ("px-", Group::PaddingX),
    ("py-", Group::PaddingY),
    ("pt-", Group::PaddingTop),
    ("pr-", Group::PaddingRight),
    ("pb-", Group::PaddingBottom),
    ("pl-", Group::PaddingLeft),
    ("ps-", Group::PaddingStart),
    ("pe-", Group::PaddingEnd),
    ("mx-", Group::MarginX),
    ("my-", Group::MarginY),
    ("mt-", Group::MarginTop),
    ("mr-", Group::MarginRight),
    ("mb-", Group::MarginBottom),
    ("ml-", Group::MarginLeft),
    ("ms-", Group::MarginStart),
    ("me-", Group::MarginEnd),
    ("z-", Group::ZIndex),
    ("w-", Group::Width),
    ("h-", Group::Height),
    ("p-", Group::Padding),
    ("m-", Group::Margin),
];

/// Prefixes shared by several properties are disambiguated by their value.
fn refine(group: Group, value: &str) -> Option<Group> {
    use Group::*;
    if value.is_empty() {
        return None;
    }
    let refined = match group {
        TextColor => {
            if FONT_SIZES.contains(&value) || is_arbitrary_length(value) {
                FontSize
            } else if TEXT_ALIGN.contains(&value) {
                TextAlign
            } else {
                TextColor
            }
        }
        FontWeight => {
            if FONT_WEIGHTS.contains(&value) || value.starts_with('[') {
                FontWeight
            } else {
                FontFamily
            }
        }
        BgColor => match value {
            "cover" | "contain" | "auto" => BgSize,
            "center" | "top" | "bottom" | "left" | "right" => BgPosition,
            "repeat" | "no-repeat" | "repeat-x" | "repeat-y" => BgRepeat,
            v if v.starts_with("gradient-") || v.starts_with("linear-") || v == "none" => BgImage,
            _ => BgColor,
        },
        BorderWidth => {
            if is_width_value(value) {
                BorderWidth
            } else if BORDER_STYLES.contains(&value) {
                BorderStyle
            } else if is_side(value) || value.split('-').next().is_some_and(is_side) {
                // border-t, border-b-2, ... set a single side
                return None;
            } else {
                BorderColor
            }
        }
        RingWidth => {
            if is_width_value(value) {
                RingWidth
            } else {
                RingColor
            }
        }
        RingOffsetWidth => {
            if is_width_value(value) {
                RingOffsetWidth
            } else {
                RingOffsetColor
            }
        }
        StrokeWidth => {
            if is_width_value(value) {
                StrokeWidth
            } else {
                StrokeColor
            }
        }
        Shadow => {
            if SHADOW_SIZES.contains(&value) {
                Shadow
            } else {
                return None;
            }
        }
        Rounded => {
            if ROUNDED_SIZES.contains(&value) || value.starts_with('[') {
                Rounded
            } else {
                // rounded-t-lg and friends round individual corners
                return None;
            }
        }
        other => other,
    };
    Some(refined)
}

fn is_side(value: &str) -> bool {
    matches!(value, "t" | "r" | "b" | "l" | "x" | "y" | "s" | "e")
}

fn is_width_value(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit()) || is_arbitrary_length(value)
}

fn is_arbitrary_length(value: &str) -> bool {
    let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) else {
        return false;
    };
    let inner = inner.strip_prefix("length:").unwrap_or(inner);
    ["px", "rem", "em", "vh", "vw", "%"]
        .iter()
        .any(|unit| inner.ends_with(unit))
        && inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}
