use crate::Side;

/// Computes a gutter width for a drag that moved from `starting_position` to `current_position`.
///
/// Dragging right grows a left gutter and shrinks a right gutter. The result never drops below
/// `min_width`.
pub fn resize_width(
    side: Side,
    min_width: u32,
    base_width: u32,
    starting_position: i64,
    current_position: i64,
) -> u32 {
    let delta = current_position.saturating_sub(starting_position);
    let base = base_width as i64;
    let width = match side {
        Side::Left => base.saturating_add(delta),
        Side::Right => base.saturating_sub(delta),
    };
    width.clamp(min_width as i64, u32::MAX as i64) as u32
}

/// One in-progress drag-resize gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeGesture {
    pub side: Side,
    pub base_width: u32,
    pub starting_position: i64,
    pub current_position: i64,
}

impl ResizeGesture {
    pub fn width(&self, min_width: u32) -> u32 {
        resize_width(
            self.side,
            min_width,
            self.base_width,
            self.starting_position,
            self.current_position,
        )
    }
}

/// Drag-resize state: `Idle -> Active -> Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizeState {
    #[default]
    Idle,
    Active(ResizeGesture),
}

impl ResizeState {
    pub fn performing(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn gesture(&self) -> Option<&ResizeGesture> {
        match self {
            Self::Idle => None,
            Self::Active(g) => Some(g),
        }
    }

    /// Starts a gesture. Ignored (returns `false`) while another gesture is active.
    pub fn start(&mut self, side: Side, base_width: u32, position: i64) -> bool {
        if self.performing() {
            vwarn!(%side, "ResizeState::start: a resize is already in progress");
            return false;
        }
        vtrace!(%side, base_width, position, "ResizeState::start");
        *self = Self::Active(ResizeGesture {
            side,
            base_width,
            starting_position: position,
            current_position: position,
        });
        true
    }

    /// Records a pointer move. Returns the updated gesture, or `None` when idle.
    pub fn update(&mut self, position: i64) -> Option<ResizeGesture> {
        match self {
            Self::Idle => None,
            Self::Active(g) => {
                g.current_position = position;
                Some(*g)
            }
        }
    }

    /// Ends the gesture, returning it if one was active.
    pub fn stop(&mut self) -> Option<ResizeGesture> {
        match core::mem::take(self) {
            Self::Idle => None,
            Self::Active(g) => Some(g),
        }
    }
}
