/// One named vector layer contributing one visual element of the clock.
///
/// The set is closed: a theme directory holds at most these twelve files,
/// identified by a fixed filename convention inherited from cairo-clock
/// themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Outermost drop shadow; also defines the logical coordinate space.
    DropShadow,
    /// Clock face background.
    Face,
    /// Hour/minute tick marks.
    Marks,
    /// Shadow beneath the hour hand.
    HourHandShadow,
    /// Shadow beneath the minute hand.
    MinuteHandShadow,
    /// Shadow beneath the second hand.
    SecondHandShadow,
    /// Hour hand.
    HourHand,
    /// Minute hand.
    MinuteHand,
    /// Second hand.
    SecondHand,
    /// Inner shadow cast by the frame onto the face.
    FaceShadow,
    /// Glass highlight above the hands.
    Glass,
    /// Outer frame, topmost layer.
    Frame,
}

impl Layer {
    /// Number of layer slots in a theme.
    pub const COUNT: usize = 12;

    /// Every layer, in slot order.
    pub const ALL: [Layer; Layer::COUNT] = [
        Layer::DropShadow,
        Layer::Face,
        Layer::Marks,
        Layer::HourHandShadow,
        Layer::MinuteHandShadow,
        Layer::SecondHandShadow,
        Layer::HourHand,
        Layer::MinuteHand,
        Layer::SecondHand,
        Layer::FaceShadow,
        Layer::Glass,
        Layer::Frame,
    ];

    /// Time-invariant layers in composite z-order, bottom to top.
    pub const STATIC_LAYERS: [Layer; 6] = [
        Layer::DropShadow,
        Layer::Face,
        Layer::Marks,
        Layer::FaceShadow,
        Layer::Glass,
        Layer::Frame,
    ];

    /// Hand and hand-shadow layers in draw order: all shadows first so each
    /// hand stays above every shadow when hands cross.
    pub const HAND_LAYERS: [Layer; 6] = [
        Layer::HourHandShadow,
        Layer::MinuteHandShadow,
        Layer::SecondHandShadow,
        Layer::HourHand,
        Layer::MinuteHand,
        Layer::SecondHand,
    ];

    /// Slot index into a theme's fixed layer array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Fixed file name of this layer inside a theme directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Layer::DropShadow => "clock-drop-shadow.svg",
            Layer::Face => "clock-face.svg",
            Layer::Marks => "clock-marks.svg",
            Layer::HourHandShadow => "clock-hour-hand-shadow.svg",
            Layer::MinuteHandShadow => "clock-minute-hand-shadow.svg",
            Layer::SecondHandShadow => "clock-second-hand-shadow.svg",
            Layer::HourHand => "clock-hour-hand.svg",
            Layer::MinuteHand => "clock-minute-hand.svg",
            Layer::SecondHand => "clock-second-hand.svg",
            Layer::FaceShadow => "clock-face-shadow.svg",
            Layer::Glass => "clock-glass.svg",
            Layer::Frame => "clock-frame.svg",
        }
    }

    /// Diagnostic name used in load warnings and render-failure logs.
    pub fn name(self) -> &'static str {
        match self {
            Layer::DropShadow => "drop-shadow",
            Layer::Face => "face",
            Layer::Marks => "marks",
            Layer::HourHandShadow => "hour-hand-shadow",
            Layer::MinuteHandShadow => "minute-hand-shadow",
            Layer::SecondHandShadow => "second-hand-shadow",
            Layer::HourHand => "hour-hand",
            Layer::MinuteHand => "minute-hand",
            Layer::SecondHand => "second-hand",
            Layer::FaceShadow => "face-shadow",
            Layer::Glass => "glass",
            Layer::Frame => "frame",
        }
    }

    /// Whether a theme is unusable without this layer.
    pub fn required(self) -> bool {
        matches!(
            self,
            Layer::DropShadow | Layer::Face | Layer::HourHand | Layer::MinuteHand
        )
    }

    /// Whether this layer is drawn with the fixed hand-shadow offset.
    pub fn is_hand_shadow(self) -> bool {
        matches!(
            self,
            Layer::HourHandShadow | Layer::MinuteHandShadow | Layer::SecondHandShadow
        )
    }

    /// Whether this layer tracks the second hand.
    pub fn is_seconds(self) -> bool {
        matches!(self, Layer::SecondHand | Layer::SecondHandShadow)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/layer.rs"]
mod tests;
