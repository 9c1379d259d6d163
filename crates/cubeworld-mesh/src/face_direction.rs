//! The six faces of a voxel cube and their fixed geometry.

/// One of the six axis directions a cube face can point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceDirection {
    /// +X direction (right face).
    PosX = 0,
    /// −X direction (left face).
    NegX = 1,
    /// +Y direction (top face).
    PosY = 2,
    /// −Y direction (bottom face).
    NegY = 3,
    /// +Z direction (front face).
    PosZ = 4,
    /// −Z direction (back face).
    NegZ = 5,
}

impl FaceDirection {
    /// All six directions in discriminant order.
    pub const ALL: [FaceDirection; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Order in which a cube's faces are emitted: front, back, right, left,
    /// top, bottom. Face `i` of a cube owns its vertices `4*i .. 4*i + 4`.
    pub const EMISSION_ORDER: [FaceDirection; 6] = [
        Self::PosZ,
        Self::NegZ,
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
    ];

    /// Returns the outward unit normal.
    pub fn normal(self) -> [f32; 3] {
        match self {
            Self::PosX => [1.0, 0.0, 0.0],
            Self::NegX => [-1.0, 0.0, 0.0],
            Self::PosY => [0.0, 1.0, 0.0],
            Self::NegY => [0.0, -1.0, 0.0],
            Self::PosZ => [0.0, 0.0, 1.0],
            Self::NegZ => [0.0, 0.0, -1.0],
        }
    }

    /// Inverse of [`normal`](Self::normal). Returns `None` for anything that is
    /// not exactly one of the six axis unit vectors.
    pub fn from_normal(normal: [f32; 3]) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.normal() == normal)
    }

    /// Corner offsets of this face for a cube of unit half-size centered at
    /// the origin.
    ///
    /// Corners run bottom-left, bottom-right, top-right, top-left as seen from
    /// outside the cube, which is counter-clockwise in a right-handed, +Y up
    /// frame. Side faces keep +Y as their "up"; the top face is seen with −Z
    /// up and the bottom face with +Z up.
    pub fn corners(self) -> [[f32; 3]; 4] {
        match self {
            Self::PosZ => [
                [-1.0, -1.0, 1.0],
                [1.0, -1.0, 1.0],
                [1.0, 1.0, 1.0],
                [-1.0, 1.0, 1.0],
            ],
            Self::NegZ => [
                [1.0, -1.0, -1.0],
                [-1.0, -1.0, -1.0],
                [-1.0, 1.0, -1.0],
                [1.0, 1.0, -1.0],
            ],
            Self::PosX => [
                [1.0, -1.0, 1.0],
                [1.0, -1.0, -1.0],
                [1.0, 1.0, -1.0],
                [1.0, 1.0, 1.0],
            ],
            Self::NegX => [
                [-1.0, -1.0, -1.0],
                [-1.0, -1.0, 1.0],
                [-1.0, 1.0, 1.0],
                [-1.0, 1.0, -1.0],
            ],
            Self::PosY => [
                [-1.0, 1.0, 1.0],
                [1.0, 1.0, 1.0],
                [1.0, 1.0, -1.0],
                [-1.0, 1.0, -1.0],
            ],
            Self::NegY => [
                [-1.0, -1.0, -1.0],
                [1.0, -1.0, -1.0],
                [1.0, -1.0, 1.0],
                [-1.0, -1.0, 1.0],
            ],
        }
    }
}
