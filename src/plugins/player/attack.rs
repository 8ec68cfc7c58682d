//! Melee swing.
//!
//! A swing lasts `swing_frames` frames. The hitbox lives for the whole swing
//! unless it lands a hit, in which case it is consumed and the rest of the
//! swing plays out without one. A new swing can only start once the previous
//! one has ended, so the swing length doubles as the attack cooldown.

use bevy::prelude::*;

#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Attack {
    frames_left: u32,
    hitbox: Option<IRect>,
}

/// Hitbox immediately right of the player rect, vertically centred on it.
pub fn hitbox_for(player: IRect, size: IVec2) -> IRect {
    let top = player.min.y + (player.height() - size.y) / 2;
    let min = IVec2::new(player.max.x, top);
    IRect::from_corners(min, min + size)
}

impl Attack {
    /// The player is attacking while a hitbox exists.
    #[inline]
    pub fn is_attacking(&self) -> bool {
        self.hitbox.is_some()
    }

    #[inline]
    pub fn is_swinging(&self) -> bool {
        self.frames_left > 0
    }

    #[inline]
    pub fn hitbox(&self) -> Option<IRect> {
        self.hitbox
    }

    #[inline]
    pub fn frames_left(&self) -> u32 {
        self.frames_left
    }

    /// Start a swing. Returns `false` (and changes nothing) mid-swing.
    pub fn start(&mut self, player: IRect, size: IVec2, frames: u32) -> bool {
        if self.is_swinging() || frames == 0 {
            return false;
        }
        self.frames_left = frames;
        self.hitbox = Some(hitbox_for(player, size));
        true
    }

    /// Keep a live hitbox anchored to the player.
    pub fn follow(&mut self, player: IRect, size: IVec2) {
        if self.hitbox.is_some() {
            self.hitbox = Some(hitbox_for(player, size));
        }
    }

    /// The hitbox landed; nothing else can be hit this swing.
    pub fn consume(&mut self) {
        self.hitbox = None;
    }

    pub fn tick(&mut self) {
        self.frames_left = self.frames_left.saturating_sub(1);
        if self.frames_left == 0 {
            self.hitbox = None;
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}
