//! Draw depth for each kind of sprite.

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Backdrop,
    Enemy,
    Player,
    Swing,
    Camera,
}

impl Layer {
    #[inline]
    pub const fn z(self) -> f32 {
        match self {
            Layer::Backdrop => 0.0,
            Layer::Enemy => 1.0,
            Layer::Player => 2.0,
            Layer::Swing => 3.0,
            Layer::Camera => 999.0,
        }
    }
}
