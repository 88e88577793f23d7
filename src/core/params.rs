use fnv::FnvHashMap;
use glam::Vec3;

/// Every tunable exposed to the control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    Red,
    Green,
    Blue,
    Threshold,
    Strength,
    Radius,
    Sensitivity,
    SoundThreshold,
    Detail,
    Size,
    SpeedX,
    SpeedY,
    SpeedZ,
    RandomX,
    RandomY,
    RandomZ,
    Damping,
}

/// Panel folder a parameter is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamGroup {
    Color,
    Glow,
    Structure,
    Movement,
}

impl ParamGroup {
    pub const ALL: [ParamGroup; 4] = [
        ParamGroup::Color,
        ParamGroup::Glow,
        ParamGroup::Structure,
        ParamGroup::Movement,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ParamGroup::Color => "Color",
            ParamGroup::Glow => "Glow",
            ParamGroup::Structure => "Structure",
            ParamGroup::Movement => "Movement",
        }
    }
}

/// Slider bounds for a parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: Option<f32>,
}

impl ParamRange {
    const fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    UnknownName(String),
    #[error("parameter `{name}` rejected non-finite value {value}")]
    NonFinite { name: &'static str, value: f32 },
}

impl Param {
    pub const ALL: [Param; 17] = [
        Param::Red,
        Param::Green,
        Param::Blue,
        Param::Threshold,
        Param::Strength,
        Param::Radius,
        Param::Sensitivity,
        Param::SoundThreshold,
        Param::Detail,
        Param::Size,
        Param::SpeedX,
        Param::SpeedY,
        Param::SpeedZ,
        Param::RandomX,
        Param::RandomY,
        Param::RandomZ,
        Param::Damping,
    ];

    /// Store key, as written by the panel.
    pub fn name(self) -> &'static str {
        match self {
            Param::Red => "red",
            Param::Green => "green",
            Param::Blue => "blue",
            Param::Threshold => "threshold",
            Param::Strength => "strength",
            Param::Radius => "radius",
            Param::Sensitivity => "sensitivity",
            Param::SoundThreshold => "sound_threshold",
            Param::Detail => "detail",
            Param::Size => "size",
            Param::SpeedX => "speed_x",
            Param::SpeedY => "speed_y",
            Param::SpeedZ => "speed_z",
            Param::RandomX => "random_x",
            Param::RandomY => "random_y",
            Param::RandomZ => "random_z",
            Param::Damping => "damping",
        }
    }

    pub fn from_name(name: &str) -> Option<Param> {
        Param::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// Human-facing slider label.
    pub fn label(self) -> &'static str {
        match self {
            Param::Red => "Red",
            Param::Green => "Green",
            Param::Blue => "Blue",
            Param::Threshold => "Threshold",
            Param::Strength => "Strength",
            Param::Radius => "Radius",
            Param::Sensitivity => "Sensitivity",
            Param::SoundThreshold => "Sound Threshold",
            Param::Detail => "Detail",
            Param::Size => "Size",
            Param::SpeedX => "X Speed",
            Param::SpeedY => "Y Speed",
            Param::SpeedZ => "Z Speed",
            Param::RandomX => "Random X",
            Param::RandomY => "Random Y",
            Param::RandomZ => "Random Z",
            Param::Damping => "Damping",
        }
    }

    pub fn group(self) -> ParamGroup {
        match self {
            Param::Red | Param::Green | Param::Blue => ParamGroup::Color,
            Param::Threshold | Param::Strength | Param::Radius => ParamGroup::Glow,
            Param::Detail | Param::Size => ParamGroup::Structure,
            _ => ParamGroup::Movement,
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            Param::Red => 1.0,
            Param::Green => 2.0,
            Param::Blue => 2.0,
            Param::Threshold => 0.1,
            Param::Strength => 0.2,
            Param::Radius => 0.4,
            Param::Sensitivity => 0.1,
            Param::SoundThreshold => 2.0,
            Param::Detail => 0.0,
            Param::Size => 5.0,
            Param::SpeedX => 0.0,
            Param::SpeedY => 0.01,
            Param::SpeedZ => 0.0,
            Param::RandomX | Param::RandomY | Param::RandomZ => 0.0,
            Param::Damping => 1.0,
        }
    }

    pub fn range(self) -> ParamRange {
        match self {
            Param::Red | Param::Green | Param::Blue => ParamRange::new(0.0, 10.0),
            Param::Threshold => ParamRange::new(0.0, 10.0),
            Param::Strength => ParamRange::new(0.0, 5.0),
            Param::Radius => ParamRange::new(0.0, 1.0),
            Param::Detail => ParamRange {
                min: 0.0,
                max: super::constants::MAX_DETAIL as f32,
                step: Some(1.0),
            },
            Param::Size => ParamRange::new(0.0, 100.0),
            Param::Sensitivity | Param::SoundThreshold => ParamRange::new(0.0, 2.0),
            _ => ParamRange::new(0.0, 1.0),
        }
    }
}

/// Per-tick view of the parameters the motion integrator consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub sensitivity: f32,
    pub sound_threshold: f32,
    pub speed: Vec3,
    pub random: Vec3,
    pub damping: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        ParamStore::default().motion()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomSettings {
    pub threshold: f32,
    pub strength: f32,
    pub radius: f32,
}

/// Geometry inputs for the icosahedron; a change forces a mesh rebuild.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshShape {
    pub radius: f32,
    pub detail: u32,
}

/// Named parameter values, written by the panel and the player, read by the
/// frame loop at the top of every tick.
///
/// `revision` bumps on every accepted write so consumers can detect changes
/// without diffing values.
#[derive(Clone, Debug)]
pub struct ParamStore {
    values: FnvHashMap<Param, f32>,
    revision: u64,
}

impl Default for ParamStore {
    fn default() -> Self {
        let values = Param::ALL
            .iter()
            .map(|p| (*p, p.default_value()))
            .collect();
        Self {
            values,
            revision: 0,
        }
    }
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value, falling back to the default for absent keys.
    pub fn get(&self, param: Param) -> f32 {
        self.values
            .get(&param)
            .copied()
            .unwrap_or_else(|| param.default_value())
    }

    pub fn get_named(&self, name: &str) -> Result<f32, ParamError> {
        Param::from_name(name)
            .map(|p| self.get(p))
            .ok_or_else(|| ParamError::UnknownName(name.to_string()))
    }

    pub fn set(&mut self, param: Param, value: f32) -> Result<(), ParamError> {
        if !value.is_finite() {
            return Err(ParamError::NonFinite {
                name: param.name(),
                value,
            });
        }
        self.values.insert(param, value);
        self.revision = self.revision.wrapping_add(1);
        Ok(())
    }

    pub fn set_named(&mut self, name: &str, value: f32) -> Result<Param, ParamError> {
        let param =
            Param::from_name(name).ok_or_else(|| ParamError::UnknownName(name.to_string()))?;
        self.set(param, value)?;
        Ok(param)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn motion(&self) -> MotionParams {
        MotionParams {
            sensitivity: self.get(Param::Sensitivity).max(0.0),
            sound_threshold: self.get(Param::SoundThreshold),
            speed: Vec3::new(
                self.get(Param::SpeedX),
                self.get(Param::SpeedY),
                self.get(Param::SpeedZ),
            ),
            random: Vec3::new(
                self.get(Param::RandomX),
                self.get(Param::RandomY),
                self.get(Param::RandomZ),
            ),
            damping: self.get(Param::Damping).clamp(0.0, 1.0),
        }
    }

    pub fn bloom(&self) -> BloomSettings {
        BloomSettings {
            threshold: self.get(Param::Threshold).max(0.0),
            strength: self.get(Param::Strength).max(0.0),
            radius: self.get(Param::Radius).clamp(0.0, 1.0),
        }
    }

    pub fn color(&self) -> [f32; 3] {
        [
            self.get(Param::Red),
            self.get(Param::Green),
            self.get(Param::Blue),
        ]
    }

    pub fn mesh_shape(&self) -> MeshShape {
        let max_detail = super::constants::MAX_DETAIL as f32;
        MeshShape {
            radius: self.get(Param::Size).max(0.0),
            detail: self.get(Param::Detail).round().clamp(0.0, max_detail) as u32,
        }
    }
}
