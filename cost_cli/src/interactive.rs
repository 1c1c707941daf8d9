//! Interactive menu loop.
//!
//! Prompts for one item at a time, prices it, prints every intermediate, and
//! returns to the menu. Engine errors (including unparseable numbers) are
//! printed and the menu is shown again; end of input exits cleanly.

use std::io::{self, BufRead, Write};

use cost_core::calculations::{
    utilities, ColumnInput, CompressorInput, HeatExchangerInput, ReactorInput, UtilitiesInput,
};
use cost_core::errors::{parse_count, parse_number};
use cost_core::{CostError, EquipmentItem, LookupPolicy};

use crate::output;

const MENU: &str = "\
1. Reactor
2. Distillation Column
3. Shell-and-Tube Heat Exchanger
4. Compressor
5. Utilities
6. Exit";

pub struct Session<R, W> {
    input: R,
    out: W,
    policy: LookupPolicy,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, policy: LookupPolicy) -> Self {
        Self { input, out, policy }
    }

    /// Run the menu until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        output::banner(&mut self.out, "EQUICOST - EQUIPMENT COST ESTIMATOR")?;
        if self.policy == LookupPolicy::Strict {
            writeln!(self.out, "Strict mode: unknown materials and types are rejected.")?;
        }

        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", MENU)?;
            let choice = match self.line("Enter your choice (1-6): ") {
                Ok(choice) => choice,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
                Err(e) => return Err(e.into()),
            };
            writeln!(self.out)?;

            let outcome = match choice.trim() {
                "1" => self.reactor(),
                "2" => self.column(),
                "3" => self.heat_exchanger(),
                "4" => self.compressor(),
                "5" => self.utilities(),
                "6" => {
                    writeln!(self.out, "Exiting the program.")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            if let Err(e) = outcome {
                if let Some(engine) = e.downcast_ref::<CostError>() {
                    output::engine_error(&mut self.out, engine)?;
                } else if e
                    .downcast_ref::<io::Error>()
                    .is_some_and(|io| io.kind() == io::ErrorKind::UnexpectedEof)
                {
                    return Ok(());
                } else {
                    return Err(e);
                }
            }
        }
    }

    // ========================================================================
    // Prompt helpers
    // ========================================================================

    fn line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(buf.trim().to_string())
    }

    fn number(&mut self, field: &str, prompt: &str) -> anyhow::Result<f64> {
        let raw = self.line(prompt)?;
        Ok(parse_number(field, &raw)?)
    }

    /// Blank input means "skip".
    fn optional_number(&mut self, field: &str, prompt: &str) -> anyhow::Result<Option<f64>> {
        let raw = self.line(prompt)?;
        if raw.is_empty() {
            return Ok(None);
        }
        Ok(Some(parse_number(field, &raw)?))
    }

    /// Blank input means "skip"; a negative value is rejected on entry.
    fn optional_non_negative(&mut self, field: &str, prompt: &str) -> anyhow::Result<Option<f64>> {
        match self.optional_number(field, prompt)? {
            Some(v) if v < 0.0 => {
                Err(CostError::invalid_input(field, v.to_string(), "Value cannot be negative").into())
            }
            value => Ok(value),
        }
    }

    /// Blank input takes the default.
    fn text(&mut self, prompt: &str, default: &str) -> anyhow::Result<String> {
        let raw = self.line(&format!("{} [{}]: ", prompt, default))?;
        Ok(if raw.is_empty() { default.to_string() } else { raw })
    }

    fn label(&mut self, default: &str) -> anyhow::Result<String> {
        self.text("Label", default)
    }

    fn price(&mut self, item: EquipmentItem) -> anyhow::Result<()> {
        let result = item.calculate(self.policy)?;
        writeln!(self.out)?;
        output::item_result(&mut self.out, item.label(), &result)?;
        Ok(())
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    fn reactor(&mut self) -> anyhow::Result<()> {
        let label = self.label("R-101")?;
        let space_time_min = self.optional_non_negative(
            "space_time_min",
            "Enter the space time (τ) in minutes (or press Enter to skip): ",
        )?;
        let flow_rate_ft3_min = self.optional_non_negative(
            "flow_rate_ft3_min",
            "Enter the volumetric flow rate (Q) in ft³/min (or press Enter to skip): ",
        )?;

        let mut input = ReactorInput {
            label,
            diameter_ft: None,
            length_ft: None,
            space_time_min,
            flow_rate_ft3_min,
            material: String::new(),
        };
        if !input.uses_space_time() {
            input.diameter_ft = Some(self.number("diameter_ft", "Enter the diameter of the reactor (ft): ")?);
            input.length_ft = Some(self.number("length_ft", "Enter the length of the reactor (ft): ")?);
        }
        input.material = self.text("Material of construction (e.g., carbon steel, stainless steel 316)", "carbon steel")?;

        self.price(EquipmentItem::Reactor(input))
    }

    fn column(&mut self) -> anyhow::Result<()> {
        let label = self.label("T-101")?;
        let diameter_ft = self.number("diameter_ft", "Enter the diameter of the column (ft): ")?;
        let length_ft = self.number("length_ft", "Enter the length of the column (ft): ")?;
        let raw_trays = self.line("Enter the number of trays: ")?;
        let tray_count = parse_count("tray_count", &raw_trays)?;
        let material = self.text("Material of construction", "carbon steel")?;
        let tray_type = self.text("Tray type (sieve or valve)", "sieve")?;
        let tray_material = self.text("Tray material (carbon steel or stainless steel)", "carbon steel")?;

        self.price(EquipmentItem::Column(ColumnInput {
            label,
            diameter_ft,
            length_ft,
            tray_count,
            material,
            tray_type,
            tray_material,
        }))
    }

    fn heat_exchanger(&mut self) -> anyhow::Result<()> {
        let label = self.label("E-101")?;
        let heat_duty_btu_hr = self.number("heat_duty_btu_hr", "Enter the heat duty (Q) in Btu/hr: ")?;
        let flux_btu_hr_ft2 = self.number("flux_btu_hr_ft2", "Enter the heat exchange flux rate (Btu/hr-ft²): ")?;
        let pressure_psig = self.number("pressure_psig", "Enter the design pressure (psig): ")?;
        let materials = self.text("Shell/tube materials (e.g., carbon steel/stainless steel)", "carbon steel/carbon steel")?;
        let tube_length_ft = self.number("tube_length_ft", "Enter the tube length (ft): ")?;

        self.price(EquipmentItem::HeatExchanger(HeatExchangerInput {
            label,
            heat_duty_btu_hr,
            flux_btu_hr_ft2,
            pressure_psig,
            materials,
            tube_length_ft,
        }))
    }

    fn compressor(&mut self) -> anyhow::Result<()> {
        let label = self.label("K-101")?;
        let inlet_flow_ft3_min = self.number("inlet_flow_ft3_min", "Enter the inlet flow rate (Q₁) in ft³/min: ")?;
        let inlet_pressure_psia = self.number("inlet_pressure_psia", "Enter the inlet pressure (P₁) in psia: ")?;
        let outlet_pressure_psia = self.number("outlet_pressure_psia", "Enter the outlet pressure (P₂) in psia: ")?;
        let specific_heat_ratio =
            self.number("specific_heat_ratio", "Enter the ratio of specific heats (k = Cp/Cv): ")?;
        let efficiency = self.number("efficiency", "Enter the efficiency (η) as a decimal (e.g., 0.78): ")?;
        let drive = self.text("Drive type (electric, steam turbine, gas turbine)", "electric")?;
        let material = self.text("Material (carbon steel, stainless steel, nickel alloy)", "carbon steel")?;

        self.price(EquipmentItem::Compressor(CompressorInput {
            label,
            inlet_flow_ft3_min,
            inlet_pressure_psia,
            outlet_pressure_psia,
            specific_heat_ratio,
            efficiency,
            drive,
            material,
        }))
    }

    fn utilities(&mut self) -> anyhow::Result<()> {
        let defaults = UtilitiesInput::default();
        let input = UtilitiesInput {
            cooling_load_kcal_hr: self.number_or(
                "cooling_load_kcal_hr",
                "Heat removed by cooling water (kcal/hr)",
                defaults.cooling_load_kcal_hr,
            )?,
            cooling_water_delta_t_c: self.number_or(
                "cooling_water_delta_t_c",
                "Cooling water temperature rise (°C)",
                defaults.cooling_water_delta_t_c,
            )?,
            heating_load_kcal_hr: self.number_or(
                "heating_load_kcal_hr",
                "Heat supplied by the fired heater (kcal/hr)",
                defaults.heating_load_kcal_hr,
            )?,
            heater_efficiency: self.number_or(
                "heater_efficiency",
                "Fired heater efficiency",
                defaults.heater_efficiency,
            )?,
        };

        let result = utilities::calculate(&input)?;
        writeln!(self.out)?;
        output::utilities_result(&mut self.out, &result)?;
        Ok(())
    }

    fn number_or(&mut self, field: &str, prompt: &str, default: f64) -> anyhow::Result<f64> {
        Ok(self
            .optional_number(field, &format!("{} [{}]: ", prompt, default))?
            .unwrap_or(default))
    }
}
