use crate::buffer::Value;
use crate::command::{Command, KeyBindings};
use crate::engine::Highlight;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RAYWHITE: Rgb = Rgb(245, 245, 245);
    pub const GREEN: Rgb = Rgb(0, 228, 48);
    pub const GRAY: Rgb = Rgb(130, 130, 130);
}

/// A line of text at a pixel position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub size: u16,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub highlighted: bool,
}

impl Bar {
    pub fn color(&self) -> Rgb {
        if self.highlighted {
            Rgb::RAYWHITE
        } else {
            Rgb::GREEN
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub values: &'a [Value],
    pub highlight: Option<Highlight>,
    /// Largest value the bars have to fit, the top of the session's range.
    pub top: Value,
    pub labels: Vec<Label>,
}

impl<'a> Frame<'a> {
    pub fn new(session: &'a Session, highlight: Option<Highlight>, bindings: &KeyBindings) -> Self {
        let mut labels = vec![Label {
            text: bindings.help_line(),
            x: 0,
            y: 0,
            size: 25,
            color: Rgb::WHITE,
        }];

        if session.is_sorted() {
            labels.push(Label {
                text: format!(
                    "Sorting Complete! Press {} to reset.",
                    bindings.key(Command::Reset).to_ascii_uppercase()
                ),
                x: 0,
                y: 25,
                size: 22,
                color: Rgb::GREEN,
            });
        }

        labels.push(Label {
            text: session.status_line(),
            x: 0,
            y: 50,
            size: 18,
            color: Rgb::GRAY,
        });

        Self {
            values: session.values(),
            // the completion frame never highlights
            highlight: highlight.filter(|_| !session.is_sorted()),
            top: session.range().max(),
            labels,
        }
    }

    pub fn bars(&self, width: u32, height: u32) -> Vec<Bar> {
        layout_bars(self.values, self.highlight, self.top, width, height)
    }
}

/// Splits `width` evenly between the values and stands each bar on the
/// bottom edge, one pixel apart.
///
/// Values are pixels while `top` fits the window; larger ranges are scaled
/// down so `top` reaches `height`. Heights never exceed `height`.
pub fn layout_bars(
    values: &[Value],
    highlight: Option<Highlight>,
    top: Value,
    width: u32,
    height: u32,
) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }

    let scale = u64::from(top.max(height).max(1));

    let slot = (width / values.len() as u32).max(1);
    let bar_width = if slot > 1 { slot - 1 } else { slot };

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let bar_height = (u64::from(value) * u64::from(height) / scale) as u32;
            let bar_height = bar_height.min(height);

            Bar {
                x: (index as u32 * slot) as i32,
                y: (height - bar_height) as i32,
                width: bar_width,
                height: bar_height,
                highlighted: highlight.map_or(false, |h| h.contains(index)),
            }
        })
        .collect()
}
