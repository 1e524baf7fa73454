//! Movement domain: physics profiles describing one character archetype.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// How a wall jump converts held direction and current speed into velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum WallJumpStyle {
    /// Fixed kick away from the wall, ignoring held direction.
    #[serde(alias = "smb")]
    Kick,
    /// Escape, re-grab or climb depending on held direction.
    #[default]
    #[serde(alias = "celeste")]
    Directional,
    /// Redirects current horizontal speed away from the wall.
    #[serde(alias = "npp")]
    Momentum,
    /// Unrecognized data value; wall jumps are disabled while selected.
    #[serde(other)]
    Unknown,
}

/// Every constant the controller reads for one archetype.
///
/// Speeds are units per tick, accelerations units per tick squared and
/// timers are counted in ticks.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProfileParams {
    // Movement
    pub walk_speed: f32,
    pub run_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub skid_deceleration: f32,
    /// `true` approaches the target speed, `false` snaps to it.
    pub has_momentum: bool,

    // Jump
    pub jump_force: f32,
    /// Added to the jump force, scaled by `|velocity.x| / run_speed`.
    pub jump_force_run_bonus: f32,
    /// Reserved for hold-to-jump-higher; the controller applies base force only.
    pub variable_jump: bool,
    pub has_double_jump: bool,

    // Dash
    pub has_dash: bool,
    pub dash_speed: f32,
    pub dash_duration_frames: u32,

    // Gravity
    pub gravity: f32,
    /// Used instead of `gravity` while `velocity.y > 0`.
    pub falling_gravity: f32,
    pub max_fall_speed: f32,
    pub air_acceleration_multiplier: f32,
    /// Keeps horizontal velocity untouched in the air with no input.
    pub no_horizontal_drag: bool,

    // Buffers
    pub run_buffer_frames: u32,
    pub coyote_frames: u32,
    pub jump_buffer_frames: u32,

    // Walls
    pub has_wall_slide: bool,
    pub wall_slide_speed: f32,
    pub has_wall_jump: bool,
    pub wall_jump_style: WallJumpStyle,
    pub wall_stick_frames: u32,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            walk_speed: 0.0,
            run_speed: 0.0,
            acceleration: 0.0,
            deceleration: 0.0,
            skid_deceleration: 0.0,
            has_momentum: true,
            jump_force: 0.0,
            jump_force_run_bonus: 0.0,
            variable_jump: false,
            has_double_jump: false,
            has_dash: false,
            dash_speed: 0.0,
            dash_duration_frames: 0,
            gravity: 0.0,
            falling_gravity: 0.0,
            max_fall_speed: 0.0,
            air_acceleration_multiplier: 1.0,
            no_horizontal_drag: false,
            run_buffer_frames: 0,
            coyote_frames: 0,
            jump_buffer_frames: 0,
            has_wall_slide: false,
            wall_slide_speed: 2.0,
            has_wall_jump: false,
            wall_jump_style: WallJumpStyle::Directional,
            wall_stick_frames: 0,
        }
    }
}

/// Values captured at construction and restored by [`PhysicsProfile::reset_physics`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct PhysicsSnapshot {
    gravity: f32,
    falling_gravity: f32,
    walk_speed: f32,
    acceleration: f32,
    jump_force: f32,
}

impl PhysicsSnapshot {
    fn capture(params: &ProfileParams) -> Self {
        Self {
            gravity: params.gravity,
            falling_gravity: params.falling_gravity,
            walk_speed: params.walk_speed,
            acceleration: params.acceleration,
            jump_force: params.jump_force,
        }
    }

    fn restore(&self, params: &mut ProfileParams) {
        params.gravity = self.gravity;
        params.falling_gravity = self.falling_gravity;
        params.walk_speed = self.walk_speed;
        params.acceleration = self.acceleration;
        params.jump_force = self.jump_force;
    }
}

/// A named, live-tunable bundle of [`ProfileParams`].
#[derive(Debug, Clone)]
pub struct PhysicsProfile {
    name: String,
    params: ProfileParams,
    defaults: PhysicsSnapshot,
}

impl PhysicsProfile {
    /// Builds a profile and snapshots its restorable fields.
    /// Suspicious values are logged but kept as supplied.
    pub fn new(name: impl Into<String>, params: ProfileParams) -> Self {
        let profile = Self {
            name: name.into(),
            defaults: PhysicsSnapshot::capture(&params),
            params,
        };

        let diagnostics = profile.diagnostics();
        if !diagnostics.is_empty() && !profile.name.is_empty() {
            warn!(
                "Profile '{}' has suspicious physics: {}",
                profile.name,
                diagnostics.join(", ")
            );
        }

        profile
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &ProfileParams {
        &self.params
    }

    /// Problems that do not stop the simulation but likely break the feel.
    pub fn diagnostics(&self) -> Vec<String> {
        let p = &self.params;
        let mut warnings = Vec::new();

        if p.gravity <= 0.0 {
            warnings.push(format!("gravity={} (should be > 0)", p.gravity));
        }
        if p.jump_force <= 0.0 {
            warnings.push(format!("jump_force={} (should be > 0)", p.jump_force));
        }
        if p.walk_speed < 0.0 {
            warnings.push(format!("walk_speed={} (should be >= 0)", p.walk_speed));
        }
        if p.acceleration <= 0.0 {
            warnings.push(format!("acceleration={} (should be > 0)", p.acceleration));
        }
        if p.wall_jump_style == WallJumpStyle::Unknown {
            warnings.push("wall_jump_style is not one of Kick/Directional/Momentum".to_string());
        }

        warnings
    }

    /// Live-tunes one numeric parameter by its data-file name.
    pub fn set_parameter(&mut self, name: &str, value: f32) -> Result<(), TuningError> {
        let param = name.parse::<ProfileParam>()?;
        self.set(param, value);
        Ok(())
    }

    /// Frame counts are rounded and floored at zero.
    pub fn set(&mut self, param: ProfileParam, value: f32) {
        let frames = value.max(0.0).round() as u32;
        let p = &mut self.params;
        match param {
            ProfileParam::Gravity => p.gravity = value,
            ProfileParam::FallingGravity => p.falling_gravity = value,
            ProfileParam::WalkSpeed => p.walk_speed = value,
            ProfileParam::RunSpeed => p.run_speed = value,
            ProfileParam::Acceleration => p.acceleration = value,
            ProfileParam::Deceleration => p.deceleration = value,
            ProfileParam::SkidDeceleration => p.skid_deceleration = value,
            ProfileParam::JumpForce => p.jump_force = value,
            ProfileParam::JumpForceRunBonus => p.jump_force_run_bonus = value,
            ProfileParam::MaxFallSpeed => p.max_fall_speed = value,
            ProfileParam::AirAccelerationMultiplier => p.air_acceleration_multiplier = value,
            ProfileParam::DashSpeed => p.dash_speed = value,
            ProfileParam::WallSlideSpeed => p.wall_slide_speed = value,
            ProfileParam::DashDurationFrames => p.dash_duration_frames = frames,
            ProfileParam::RunBufferFrames => p.run_buffer_frames = frames,
            ProfileParam::CoyoteFrames => p.coyote_frames = frames,
            ProfileParam::JumpBufferFrames => p.jump_buffer_frames = frames,
            ProfileParam::WallStickFrames => p.wall_stick_frames = frames,
        }
    }

    pub fn get(&self, param: ProfileParam) -> f32 {
        let p = &self.params;
        match param {
            ProfileParam::Gravity => p.gravity,
            ProfileParam::FallingGravity => p.falling_gravity,
            ProfileParam::WalkSpeed => p.walk_speed,
            ProfileParam::RunSpeed => p.run_speed,
            ProfileParam::Acceleration => p.acceleration,
            ProfileParam::Deceleration => p.deceleration,
            ProfileParam::SkidDeceleration => p.skid_deceleration,
            ProfileParam::JumpForce => p.jump_force,
            ProfileParam::JumpForceRunBonus => p.jump_force_run_bonus,
            ProfileParam::MaxFallSpeed => p.max_fall_speed,
            ProfileParam::AirAccelerationMultiplier => p.air_acceleration_multiplier,
            ProfileParam::DashSpeed => p.dash_speed,
            ProfileParam::WallSlideSpeed => p.wall_slide_speed,
            ProfileParam::DashDurationFrames => p.dash_duration_frames as f32,
            ProfileParam::RunBufferFrames => p.run_buffer_frames as f32,
            ProfileParam::CoyoteFrames => p.coyote_frames as f32,
            ProfileParam::JumpBufferFrames => p.jump_buffer_frames as f32,
            ProfileParam::WallStickFrames => p.wall_stick_frames as f32,
        }
    }

    /// Restores gravity, falling gravity, walk speed, acceleration and jump
    /// force to their construction-time values. Other fields are untouched.
    pub fn reset_physics(&mut self) {
        self.defaults.restore(&mut self.params);
        debug!("Profile '{}' physics reset to defaults", self.name);
    }
}

/// Numeric profile attributes exposed to live tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileParam {
    Gravity,
    FallingGravity,
    WalkSpeed,
    RunSpeed,
    Acceleration,
    Deceleration,
    SkidDeceleration,
    JumpForce,
    JumpForceRunBonus,
    MaxFallSpeed,
    AirAccelerationMultiplier,
    DashSpeed,
    WallSlideSpeed,
    DashDurationFrames,
    RunBufferFrames,
    CoyoteFrames,
    JumpBufferFrames,
    WallStickFrames,
}

impl ProfileParam {
    pub const ALL: [ProfileParam; 18] = [
        ProfileParam::Gravity,
        ProfileParam::FallingGravity,
        ProfileParam::WalkSpeed,
        ProfileParam::Acceleration,
        ProfileParam::JumpForce,
        ProfileParam::RunSpeed,
        ProfileParam::Deceleration,
        ProfileParam::SkidDeceleration,
        ProfileParam::JumpForceRunBonus,
        ProfileParam::MaxFallSpeed,
        ProfileParam::AirAccelerationMultiplier,
        ProfileParam::DashSpeed,
        ProfileParam::WallSlideSpeed,
        ProfileParam::DashDurationFrames,
        ProfileParam::RunBufferFrames,
        ProfileParam::CoyoteFrames,
        ProfileParam::JumpBufferFrames,
        ProfileParam::WallStickFrames,
    ];

    /// Whether the attribute is a tick count rather than a continuous value.
    pub fn is_frames(self) -> bool {
        matches!(
            self,
            ProfileParam::DashDurationFrames
                | ProfileParam::RunBufferFrames
                | ProfileParam::CoyoteFrames
                | ProfileParam::JumpBufferFrames
                | ProfileParam::WallStickFrames
        )
    }

    /// Field name as written in the profile data files.
    pub fn name(self) -> &'static str {
        match self {
            ProfileParam::Gravity => "gravity",
            ProfileParam::FallingGravity => "falling_gravity",
            ProfileParam::WalkSpeed => "walk_speed",
            ProfileParam::RunSpeed => "run_speed",
            ProfileParam::Acceleration => "acceleration",
            ProfileParam::Deceleration => "deceleration",
            ProfileParam::SkidDeceleration => "skid_deceleration",
            ProfileParam::JumpForce => "jump_force",
            ProfileParam::JumpForceRunBonus => "jump_force_run_bonus",
            ProfileParam::MaxFallSpeed => "max_fall_speed",
            ProfileParam::AirAccelerationMultiplier => "air_acceleration_multiplier",
            ProfileParam::DashSpeed => "dash_speed",
            ProfileParam::WallSlideSpeed => "wall_slide_speed",
            ProfileParam::DashDurationFrames => "dash_duration_frames",
            ProfileParam::RunBufferFrames => "run_buffer_frames",
            ProfileParam::CoyoteFrames => "coyote_frames",
            ProfileParam::JumpBufferFrames => "jump_buffer_frames",
            ProfileParam::WallStickFrames => "wall_stick_frames",
        }
    }
}

impl FromStr for ProfileParam {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileParam::ALL
            .into_iter()
            .find(|param| param.name() == s)
            .ok_or_else(|| TuningError::UnknownParameter(s.to_string()))
    }
}

/// Error raised by the live tuning surface.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    UnknownParameter(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::UnknownParameter(name) => write!(f, "unknown parameter '{}'", name),
        }
    }
}

impl std::error::Error for TuningError {}
