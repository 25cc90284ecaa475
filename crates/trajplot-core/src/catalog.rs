// File: crates/trajplot-core/src/catalog.rs
// Summary: Fixed chart catalog: which columns each chart draws, its file name, title and labels.

pub const TIME: &str = "time_s";
pub const X: &str = "x_m";
pub const Y: &str = "y_m";

/// Columns every log must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = [TIME, X, Y];

pub const VELOCITY_COLUMNS: [&str; 3] = ["vx_m_s", "vy_m_s", "v_mag_m_s"];
pub const ACCELERATION_COLUMNS: [&str; 3] = ["ax_m_s2", "ay_m_s2", "a_mag_m_s2"];
pub const MASS_COLUMNS: [&str; 2] = ["water_mass_kg", "total_mass_kg"];
pub const THRUST_COLUMNS: [&str; 1] = ["thrust_N"];
pub const PRESSURE_COLUMNS: [&str; 1] = ["pressure_abs_Pa"];

/// Whether a chart reads the full row set or the downsampled one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartGroup {
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Trajectory,
    Position,
    OtherVariables,
    Velocity,
    Acceleration,
    Mass,
    Thrust,
    Pressure,
}

impl ChartKind {
    /// Render order: primary charts first, then the secondary group.
    pub const ALL: [ChartKind; 8] = [
        ChartKind::Trajectory,
        ChartKind::Position,
        ChartKind::OtherVariables,
        ChartKind::Velocity,
        ChartKind::Acceleration,
        ChartKind::Mass,
        ChartKind::Thrust,
        ChartKind::Pressure,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::Trajectory => "trayectoria_y_vs_x.png",
            ChartKind::Position => "posicion_xy_vs_tiempo.png",
            ChartKind::OtherVariables => "variables_vs_tiempo.png",
            ChartKind::Velocity => "velocidades_vs_tiempo.png",
            ChartKind::Acceleration => "aceleraciones_vs_tiempo.png",
            ChartKind::Mass => "masas_vs_tiempo.png",
            ChartKind::Thrust => "thrust_vs_tiempo.png",
            ChartKind::Pressure => "presion_vs_tiempo.png",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Trajectory => "Trayectoria (Y vs X)",
            ChartKind::Position => "Posición X y Y vs Tiempo",
            ChartKind::OtherVariables => "Evolución de todas las variables excepto posición",
            ChartKind::Velocity => "Velocidades vs Tiempo",
            ChartKind::Acceleration => "Aceleraciones vs Tiempo",
            ChartKind::Mass => "Masas vs Tiempo",
            ChartKind::Thrust => "Empuje vs Tiempo",
            ChartKind::Pressure => "Presión Absoluta vs Tiempo",
        }
    }

    pub fn x_label(self) -> &'static str {
        match self {
            ChartKind::Trajectory => "Posición X (m)",
            _ => "Tiempo (s)",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            ChartKind::Trajectory => "Posición Y (m)",
            ChartKind::Position => "Posición (m)",
            ChartKind::OtherVariables => "Valor",
            ChartKind::Velocity => "Velocidad (m/s)",
            ChartKind::Acceleration => "Aceleración (m/s²)",
            ChartKind::Mass => "Masa (kg)",
            ChartKind::Thrust => "Empuje (N)",
            ChartKind::Pressure => "Presión absoluta (Pa)",
        }
    }

    pub fn group(self) -> ChartGroup {
        match self {
            ChartKind::Trajectory | ChartKind::Position => ChartGroup::Primary,
            _ => ChartGroup::Secondary,
        }
    }

    /// Figure size in inches (width, height).
    pub fn figure_inches(self) -> (f32, f32) {
        match self {
            ChartKind::OtherVariables => (8.0, 5.0),
            _ => (6.0, 4.0),
        }
    }

    /// Column the X axis is drawn from.
    pub fn x_column(self) -> &'static str {
        match self {
            ChartKind::Trajectory => X,
            _ => TIME,
        }
    }

    /// Candidate Y columns for this chart; only those present in the log are drawn.
    /// `OtherVariables` is derived from the log's headers instead.
    pub fn y_candidates(self) -> &'static [&'static str] {
        match self {
            ChartKind::Trajectory => &[Y],
            ChartKind::Position => &[X, Y],
            ChartKind::OtherVariables => &[],
            ChartKind::Velocity => &VELOCITY_COLUMNS,
            ChartKind::Acceleration => &ACCELERATION_COLUMNS,
            ChartKind::Mass => &MASS_COLUMNS,
            ChartKind::Thrust => &THRUST_COLUMNS,
            ChartKind::Pressure => &PRESSURE_COLUMNS,
        }
    }

    pub fn equal_aspect(self) -> bool {
        matches!(self, ChartKind::Trajectory)
    }

    pub fn show_legend(self) -> bool {
        !matches!(self, ChartKind::Trajectory)
    }

    /// Y columns actually drawn for a log with `headers`.
    /// Primary charts always name their required columns, present or not;
    /// missing ones surface when the chart reads them.
    pub fn y_columns(self, headers: &[String]) -> Vec<String> {
        match self {
            ChartKind::Trajectory | ChartKind::Position => {
                self.y_candidates().iter().map(|c| c.to_string()).collect()
            }
            ChartKind::OtherVariables => headers
                .iter()
                .filter(|h| !REQUIRED_COLUMNS.contains(&h.as_str()))
                .cloned()
                .collect(),
            _ => self
                .y_candidates()
                .iter()
                .filter(|c| headers.iter().any(|h| h == *c))
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn file_names_are_unique() {
        let mut names: Vec<_> = ChartKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ChartKind::ALL.len());
    }

    #[test]
    fn groups_split_primary_and_secondary() {
        assert_eq!(ChartKind::Trajectory.group(), ChartGroup::Primary);
        assert_eq!(ChartKind::Position.group(), ChartGroup::Primary);
        assert_eq!(ChartKind::Thrust.group(), ChartGroup::Secondary);
        assert_eq!(ChartKind::OtherVariables.group(), ChartGroup::Secondary);
    }

    #[test]
    fn optional_groups_filter_to_present_columns() {
        let h = headers(&["time_s", "x_m", "y_m", "vy_m_s", "v_mag_m_s", "thrust_N"]);
        assert_eq!(ChartKind::Velocity.y_columns(&h), vec!["vy_m_s", "v_mag_m_s"]);
        assert_eq!(ChartKind::Thrust.y_columns(&h), vec!["thrust_N"]);
        assert!(ChartKind::Mass.y_columns(&h).is_empty());
        assert!(ChartKind::Pressure.y_columns(&h).is_empty());
    }

    #[test]
    fn other_variables_excludes_position_and_time() {
        let h = headers(&["time_s", "x_m", "y_m", "thrust_N", "custom"]);
        assert_eq!(ChartKind::OtherVariables.y_columns(&h), vec!["thrust_N", "custom"]);
    }

    #[test]
    fn primary_columns_listed_even_when_absent() {
        let h = headers(&["time_s", "y_m"]);
        assert_eq!(ChartKind::Position.y_columns(&h), vec!["x_m", "y_m"]);
    }
}
