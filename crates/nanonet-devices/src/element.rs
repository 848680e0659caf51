//! Conduction-element models.
//!
//! Each element maps its stored gate voltage to a conductance. The mapping
//! is a pure function of the element's fields; the gate voltage itself is
//! set externally by the network's gating calls.

use crate::error::{Error, Result};
use crate::junction::JunctionType;

/// A fixed ohmic resistor.
///
/// Carries a gate voltage like every other element so that gating sweeps
/// treat the network uniformly, but its conductance never depends on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    resistance: f64,
    gate_voltage: f64,
}

impl Resistor {
    /// Create a resistor with the given resistance in ohms.
    pub fn new(resistance: f64) -> Result<Self> {
        if resistance <= 0.0 {
            return Err(Error::NonPositiveResistance {
                element: "resistor",
                parameter: "resistance",
                value: resistance,
            });
        }
        Ok(Self {
            resistance,
            gate_voltage: 0.0,
        })
    }

    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }
}

/// A two-state switch: on-resistance at or below the threshold gate
/// voltage, off-resistance above it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdSwitch {
    on_resistance: f64,
    off_resistance: f64,
    threshold_voltage: f64,
    gate_voltage: f64,
}

impl ThresholdSwitch {
    pub fn new(on_resistance: f64, off_resistance: f64, threshold_voltage: f64) -> Result<Self> {
        if on_resistance <= 0.0 {
            return Err(Error::NonPositiveResistance {
                element: "threshold switch",
                parameter: "on-resistance",
                value: on_resistance,
            });
        }
        if off_resistance <= 0.0 {
            return Err(Error::NonPositiveResistance {
                element: "threshold switch",
                parameter: "off-resistance",
                value: off_resistance,
            });
        }
        Ok(Self {
            on_resistance,
            off_resistance,
            threshold_voltage,
            gate_voltage: 0.0,
        })
    }

    pub fn conductance(&self) -> f64 {
        if self.gate_voltage <= self.threshold_voltage {
            1.0 / self.on_resistance
        } else {
            1.0 / self.off_resistance
        }
    }
}

/// Transistor with an exponential gate response, `G = exp(-alpha * vg)`,
/// normalized so that G(-10) = 1.
#[derive(Debug, Clone, PartialEq)]
pub struct LinExpTransistor {
    junction: JunctionType,
    alpha: f64,
    gate_voltage: f64,
}

impl LinExpTransistor {
    /// Create a transistor for the given junction type, with `alpha`
    /// looked up in preset table `preset` (0..=2).
    pub fn new(junction: JunctionType, preset: usize) -> Result<Self> {
        let alpha = junction.lin_exp_alpha(preset)?;
        Ok(Self {
            junction,
            alpha,
            gate_voltage: 0.0,
        })
    }

    pub fn junction(&self) -> JunctionType {
        self.junction
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn conductance(&self) -> f64 {
        self.conductance_at(self.gate_voltage)
    }

    pub fn conductance_at(&self, gate_voltage: f64) -> f64 {
        (-self.alpha * gate_voltage).exp() * (-10.0 * self.alpha).exp()
    }
}

/// Transistor with a logistic (Fermi-Dirac) gate response centered at
/// vg = 0, stepping from 1 down to the junction's off conductance.
#[derive(Debug, Clone, PartialEq)]
pub struct FermiDiracTransistor {
    junction: JunctionType,
    off_conductance: f64,
    gate_voltage: f64,
}

impl FermiDiracTransistor {
    pub fn new(junction: JunctionType, preset: usize) -> Result<Self> {
        let ratio = junction.on_off_ratio(preset)?;
        Ok(Self {
            junction,
            off_conductance: 1.0 / ratio,
            gate_voltage: 0.0,
        })
    }

    pub fn junction(&self) -> JunctionType {
        self.junction
    }

    /// Step amplitude; the conductance swings from `scaling() + offset()`
    /// at large negative gate voltage down to `offset()`.
    pub fn scaling(&self) -> f64 {
        1.0 - self.off_conductance
    }

    /// Floor conductance in the fully-off state.
    pub fn offset(&self) -> f64 {
        self.off_conductance
    }

    pub fn conductance(&self) -> f64 {
        self.conductance_at(self.gate_voltage)
    }

    /// Evaluate the step at an explicit gate voltage, without touching the
    /// stored one.
    pub fn conductance_at(&self, gate_voltage: f64) -> f64 {
        self.scaling() / ((10.0 * gate_voltage).exp() + 1.0) + self.offset()
    }
}

/// Closed set of conduction-element models.
///
/// Every variant stores its own gate voltage; `conductance` reads it,
/// `set_gate_voltage` replaces it.
#[derive(Debug, Clone, PartialEq)]
pub enum ConductanceElement {
    Resistor(Resistor),
    ThresholdSwitch(ThresholdSwitch),
    LinExp(LinExpTransistor),
    FermiDirac(FermiDiracTransistor),
}

impl ConductanceElement {
    /// Conductance at the element's stored gate voltage. Strictly positive
    /// for every model.
    pub fn conductance(&self) -> f64 {
        match self {
            ConductanceElement::Resistor(r) => r.conductance(),
            ConductanceElement::ThresholdSwitch(s) => s.conductance(),
            ConductanceElement::LinExp(t) => t.conductance(),
            ConductanceElement::FermiDirac(t) => t.conductance(),
        }
    }

    /// Conductance at an explicit gate voltage. The resistor ignores the
    /// gate entirely.
    pub fn conductance_at(&self, gate_voltage: f64) -> f64 {
        match self {
            ConductanceElement::Resistor(r) => r.conductance(),
            ConductanceElement::ThresholdSwitch(s) => {
                if gate_voltage <= s.threshold_voltage {
                    1.0 / s.on_resistance
                } else {
                    1.0 / s.off_resistance
                }
            }
            ConductanceElement::LinExp(t) => t.conductance_at(gate_voltage),
            ConductanceElement::FermiDirac(t) => t.conductance_at(gate_voltage),
        }
    }

    pub fn gate_voltage(&self) -> f64 {
        match self {
            ConductanceElement::Resistor(r) => r.gate_voltage,
            ConductanceElement::ThresholdSwitch(s) => s.gate_voltage,
            ConductanceElement::LinExp(t) => t.gate_voltage,
            ConductanceElement::FermiDirac(t) => t.gate_voltage,
        }
    }

    pub fn set_gate_voltage(&mut self, gate_voltage: f64) {
        match self {
            ConductanceElement::Resistor(r) => r.gate_voltage = gate_voltage,
            ConductanceElement::ThresholdSwitch(s) => s.gate_voltage = gate_voltage,
            ConductanceElement::LinExp(t) => t.gate_voltage = gate_voltage,
            ConductanceElement::FermiDirac(t) => t.gate_voltage = gate_voltage,
        }
    }
}

impl From<Resistor> for ConductanceElement {
    fn from(r: Resistor) -> Self {
        ConductanceElement::Resistor(r)
    }
}

impl From<ThresholdSwitch> for ConductanceElement {
    fn from(s: ThresholdSwitch) -> Self {
        ConductanceElement::ThresholdSwitch(s)
    }
}

impl From<LinExpTransistor> for ConductanceElement {
    fn from(t: LinExpTransistor) -> Self {
        ConductanceElement::LinExp(t)
    }
}

impl From<FermiDiracTransistor> for ConductanceElement {
    fn from(t: FermiDiracTransistor) -> Self {
        ConductanceElement::FermiDirac(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resistor_rejects_non_positive() {
        for r in [0.0, -1.0, -0.5] {
            assert!(Resistor::new(r).is_err());
        }
    }

    #[test]
    fn test_resistor_conductance() {
        for r in [1.0, 2.0, 0.5] {
            let resistor = Resistor::new(r).unwrap();
            assert_relative_eq!(resistor.conductance(), 1.0 / r);
        }
    }

    #[test]
    fn test_resistor_ignores_gate() {
        let mut el: ConductanceElement = Resistor::new(2.0).unwrap().into();
        let g = el.conductance();
        el.set_gate_voltage(7.0);
        assert_eq!(el.conductance(), g);
        assert_eq!(el.conductance_at(-3.0), g);
    }

    #[test]
    fn test_threshold_switch_rejects_non_positive() {
        assert!(ThresholdSwitch::new(0.0, 1e3, 0.0).is_err());
        assert!(ThresholdSwitch::new(1.0, -1e3, 0.0).is_err());
    }

    #[test]
    fn test_threshold_switch_states() {
        let mut el: ConductanceElement = ThresholdSwitch::new(1.0, 1000.0, 0.0).unwrap().into();
        // at threshold the switch is still on
        el.set_gate_voltage(0.0);
        assert_relative_eq!(el.conductance(), 1.0);
        el.set_gate_voltage(0.1);
        assert_relative_eq!(el.conductance(), 1.0 / 1000.0);
        el.set_gate_voltage(-5.0);
        assert_relative_eq!(el.conductance(), 1.0);
    }

    #[test]
    fn test_lin_exp_normalized_at_minus_ten() {
        for preset in 0..3 {
            for jt in JunctionType::ALL {
                let t = LinExpTransistor::new(jt, preset).unwrap();
                assert_relative_eq!(t.conductance_at(-10.0), 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_lin_exp_strictly_decreasing() {
        for preset in 0..3 {
            for jt in JunctionType::ALL {
                let t = LinExpTransistor::new(jt, preset).unwrap();
                let mut prev = t.conductance_at(-10.0);
                for step in 1..=20 {
                    let g = t.conductance_at(-10.0 + step as f64);
                    assert!(g < prev, "{jt} preset {preset} not decreasing");
                    prev = g;
                }
            }
        }
    }

    #[test]
    fn test_fermi_dirac_midpoint_and_limits() {
        let t = FermiDiracTransistor::new(JunctionType::Ms, 0).unwrap();
        assert_eq!(t.conductance_at(0.0), t.scaling() / 2.0 + t.offset());
        assert_relative_eq!(t.conductance_at(1e3), t.offset());
        assert_relative_eq!(t.conductance_at(-1e3), t.scaling() + t.offset());
    }

    #[test]
    fn test_fermi_dirac_non_switching_junction_is_flat() {
        let t = FermiDiracTransistor::new(JunctionType::Mm, 0).unwrap();
        // ratio 1: off conductance equals on conductance
        assert_relative_eq!(t.conductance_at(-10.0), 1.0);
        assert_relative_eq!(t.conductance_at(10.0), 1.0);
    }

    #[test]
    fn test_every_model_positive_conductance() {
        let elements: Vec<ConductanceElement> = vec![
            Resistor::new(10.0).unwrap().into(),
            ThresholdSwitch::new(1.0, 1e4, 0.0).unwrap().into(),
            LinExpTransistor::new(JunctionType::Ms, 0).unwrap().into(),
            FermiDiracTransistor::new(JunctionType::Ms, 0).unwrap().into(),
        ];
        for mut el in elements {
            for vg in [-10.0, 0.0, 10.0] {
                el.set_gate_voltage(vg);
                assert!(el.conductance() > 0.0);
            }
        }
    }
}
