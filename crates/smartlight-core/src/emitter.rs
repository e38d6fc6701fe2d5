//! Committed light state and directive generation.
//!
//! The emitter is the only place the committed `(winner, presence)` pair
//! changes. Committing a pair that equals the current one produces nothing;
//! any other pair produces one directive group and becomes current.

use smartlight_proto::{Color, Directive, LightState, UserRecord};

/// Colors shown when nobody owns the light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Someone is present but no user owns the light.
    pub ambient: Color,
    /// Nobody is present.
    pub off: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self { ambient: Color::AMBIENT, off: Color::OFF }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    winner: Option<UserRecord>,
    present: bool,
}

/// Last emitted light state.
#[derive(Debug, Clone)]
pub struct Emitter {
    palette: Palette,
    /// `None` after [`Emitter::invalidate`] until the next commit.
    committed: Option<Snapshot>,
}

impl Emitter {
    /// Create an emitter for a light that is free and sees nobody.
    pub fn new(palette: Palette) -> Self {
        Self { palette, committed: Some(Snapshot { winner: None, present: false }) }
    }

    /// Committed winner.
    pub fn winner(&self) -> Option<&UserRecord> {
        self.committed.as_ref().and_then(|snapshot| snapshot.winner.as_ref())
    }

    /// Committed ambient presence.
    pub fn is_present(&self) -> bool {
        self.committed.as_ref().is_some_and(|snapshot| snapshot.present)
    }

    /// Whether committing `(winner, present)` would change nothing.
    pub fn matches(&self, winner: Option<&UserRecord>, present: bool) -> bool {
        self.committed
            .as_ref()
            .is_some_and(|snapshot| snapshot.winner.as_ref() == winner && snapshot.present == present)
    }

    /// Forget the committed state so the next commit always emits.
    ///
    /// Returns the winner that was committed.
    pub fn invalidate(&mut self) -> Option<UserRecord> {
        self.committed.take().and_then(|snapshot| snapshot.winner)
    }

    /// Commit a new state, returning the directives to emit, or `None` if the
    /// state is unchanged.
    pub fn commit(&mut self, winner: Option<UserRecord>, present: bool) -> Option<Vec<Directive>> {
        if self.matches(winner.as_ref(), present) {
            return None;
        }

        let directives = self.directives(winner.as_ref(), present);
        self.committed = Some(Snapshot { winner, present });
        Some(directives)
    }

    /// Directives describing `(winner, present)`, in emission order.
    pub fn directives(&self, winner: Option<&UserRecord>, present: bool) -> Vec<Directive> {
        match winner {
            Some(user) => vec![
                Directive::Color(user.light_color),
                Directive::LowLight(user.low_light),
                Directive::UserId(user.user_id.clone()),
                Directive::State(LightState::Used),
                Directive::UserType(user.user_type),
            ],
            None if present => vec![
                Directive::State(LightState::Free),
                Directive::Color(self.palette.ambient),
                Directive::LowLight(true),
            ],
            None => vec![Directive::State(LightState::Free), Directive::Color(self.palette.off)],
        }
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}
