use smallvec::SmallVec;

/// Where a pass writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassTarget {
    /// Full-resolution offscreen copy of the scene, source of the bloom chain.
    SceneHdr,
    BloomA,
    BloomB,
    /// The visible canvas.
    Surface,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassLoad {
    Clear,
    Load,
}

/// Which pipeline a pass runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassKind {
    Mesh,
    Copy,
    Bright,
    BlurHorizontal,
    BlurVertical,
    BloomComposite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassSpec {
    pub label: &'static str,
    pub kind: PassKind,
    pub target: PassTarget,
    pub load: PassLoad,
}

const fn pass(label: &'static str, kind: PassKind, target: PassTarget, load: PassLoad) -> PassSpec {
    PassSpec {
        label,
        kind,
        target,
        load,
    }
}

pub type PassPlan = SmallVec<[PassSpec; 6]>;

/// Ordered passes for one frame.
///
/// The mesh is drawn once into the HDR target; the base pass copies it to the
/// surface (the only clear the surface gets this frame), the bright/blur chain
/// runs at half resolution, and the bloom composite adds on top of the base
/// pass with the surface loaded, not cleared.
pub fn frame_passes() -> PassPlan {
    use PassKind::*;
    use PassLoad::*;
    use PassTarget::*;
    SmallVec::from_buf([
        pass("scene", Mesh, SceneHdr, Clear),
        pass("base", Copy, Surface, Clear),
        pass("bright_pass", Bright, BloomA, Clear),
        pass("blur_h", BlurHorizontal, BloomB, Clear),
        pass("blur_v", BlurVertical, BloomA, Clear),
        pass("bloom", BloomComposite, Surface, Load),
    ])
}

/// Pixel sizes of the offscreen targets for a given surface size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetSizes {
    pub scene: (u32, u32),
    pub bloom: (u32, u32),
}

impl TargetSizes {
    /// `None` for a collapsed (zero-area) viewport.
    pub fn for_surface(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            scene: (width, height),
            bloom: ((width / 2).max(1), (height / 2).max(1)),
        })
    }

    pub fn of(&self, target: PassTarget) -> (u32, u32) {
        match target {
            PassTarget::SceneHdr | PassTarget::Surface => self.scene,
            PassTarget::BloomA | PassTarget::BloomB => self.bloom,
        }
    }
}
