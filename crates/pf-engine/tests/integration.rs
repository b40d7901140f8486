//! End-to-end tests for pf-engine.

use pf_engine::{
    BundleInput, EngineError, FittingCount, FluidInput, LineKind, LineSizingInput, Measurement,
    PipeInput, PumpModeInput, PumpSide, PumpSizingInput, ReferenceTables, calculate_bundle,
    calculate_line, calculate_pump,
};

fn measurement(value: f64, unit: &str) -> Measurement {
    Measurement {
        value,
        unit: unit.into(),
    }
}

fn water() -> FluidInput {
    FluidInput {
        density: measurement(1000.0, "kg/m3"),
        viscosity: measurement(1.0, "cP"),
        temperature: measurement(20.0, "C"),
        vapor_pressure: Some(measurement(2340.0, "Pa")),
        compressibility: None,
        molar_mass: None,
        specific_heat_ratio: None,
    }
}

fn water_line(flow_m3h: f64, service: &str) -> LineSizingInput {
    LineSizingInput {
        line_type: LineKind::Liquid,
        fluid: water(),
        pipe: PipeInput {
            nominal: "6".into(),
            schedule: "40".into(),
            material: "carbon-steel".into(),
            length: measurement(100.0, "m"),
            fallback_diameter: None,
        },
        flow: measurement(flow_m3h, "m3/h"),
        fittings: Vec::new(),
        elevation_change: None,
        service: service.into(),
        friction_model: None,
    }
}

#[test]
fn water_line_reference_case() {
    // 100 m3/h water in 6" Sch 40 carbon steel, 100 m run
    let tables = ReferenceTables::standard();
    let result = calculate_line(&water_line(100.0, "liquid-process"), &tables).unwrap();

    assert!((result.flow.velocity_m_s - 1.49).abs() < 0.01);
    assert!((result.flow.reynolds - 2.29e5).abs() / 2.29e5 < 0.01);
    assert_eq!(result.flow.regime, "Turbulent");
    assert_eq!(result.friction.regime, "Turbulent");

    // Swamee-Jain total within 1% of the iterative Colebrook solve
    let mut colebrook_input = water_line(100.0, "liquid-process");
    colebrook_input.friction_model = Some("colebrook".into());
    let colebrook = calculate_line(&colebrook_input, &tables).unwrap();
    let (sj, cw) = (result.pressure_drop.total, colebrook.pressure_drop.total);
    assert!((sj - cw).abs() / cw < 0.01, "sj={sj} cw={cw}");
    assert!(colebrook.friction.iterations > 0);
    assert_eq!(result.friction.iterations, 0);
}

#[test]
fn pressure_drop_parts_sum_to_total() {
    let tables = ReferenceTables::standard();
    let mut input = water_line(100.0, "liquid-process");
    input.fittings = vec![
        FittingCount {
            fitting: "elbow-90-lr".into(),
            count: 6,
        },
        FittingCount {
            fitting: "gate-valve".into(),
            count: 2,
        },
    ];
    input.elevation_change = Some(measurement(8.0, "m"));

    let result = calculate_line(&input, &tables).unwrap();
    let sum: f64 = result.pressure_drop.parts.iter().map(|p| p.value).sum();
    let total = result.pressure_drop.total;
    assert!((sum - total).abs() <= 1e-9 * total.abs().max(sum.abs()));
    assert_eq!(result.pressure_drop.parts.len(), 3);
}

#[test]
fn six_inch_velocity_band_failure_warns() {
    // Pump suction service: 6" falls in the size3to6 band (1.2 m/s).
    // 87.5 m3/h gives ~1.30 m/s, which must fail with both numbers in
    // the warning text.
    let tables = ReferenceTables::standard();
    let result = calculate_line(&water_line(87.5, "pump-suction"), &tables).unwrap();

    let velocity = result
        .criteria
        .iter()
        .find(|c| c.name == "velocity")
        .unwrap();
    assert_eq!(velocity.limit, Some(1.2));
    assert_eq!(velocity.verdict, "Fail");
    assert!(
        result
            .warnings
            .iter()
            .any(|w| w.contains("1.30") && w.contains("1.20")),
        "warnings: {:?}",
        result.warnings
    );
}

#[test]
fn gas_line_measures_mach_and_erosional_velocity() {
    let tables = ReferenceTables::standard();
    let input = LineSizingInput {
        line_type: LineKind::Gas,
        fluid: FluidInput {
            density: measurement(40.0, "kg/m3"),
            viscosity: measurement(0.012, "cP"),
            temperature: measurement(30.0, "C"),
            vapor_pressure: None,
            compressibility: Some(0.92),
            molar_mass: Some(18.2),
            specific_heat_ratio: Some(1.27),
        },
        pipe: PipeInput {
            nominal: "8".into(),
            schedule: "40".into(),
            material: "carbon-steel".into(),
            length: measurement(250.0, "m"),
            fallback_diameter: None,
        },
        flow: measurement(1500.0, "m3/h"),
        fittings: Vec::new(),
        elevation_change: None,
        service: "gas-process".into(),
        friction_model: None,
    };
    let result = calculate_line(&input, &tables).unwrap();

    let mach = result.criteria.iter().find(|c| c.name == "mach").unwrap();
    let measured_mach = mach.measured.unwrap();
    assert!(measured_mach > 0.0 && measured_mach < 0.3);
    assert_eq!(mach.verdict, "Pass");

    let erosional = result
        .criteria
        .iter()
        .find(|c| c.name == "erosional-velocity")
        .unwrap();
    // Ve = 122/sqrt(40) ~ 19.3 m/s
    assert!((erosional.limit.unwrap() - 19.29).abs() < 0.01);
}

#[test]
fn validation_collects_everything_and_yields_no_result() {
    let tables = ReferenceTables::standard();
    let mut input = water_line(100.0, "liquid-process");
    input.flow.value = 0.0;
    input.fluid.viscosity.value = -2.0;
    input.fluid.temperature = measurement(-500.0, "C");
    input.pipe.length.value = -1.0;

    match calculate_line(&input, &tables) {
        Err(EngineError::Validation(issues)) => {
            assert_eq!(issues.len(), 4, "issues: {issues:?}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn line_result_serializes() {
    let tables = ReferenceTables::standard();
    let result = calculate_line(&water_line(100.0, "liquid-process"), &tables).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["flow"]["velocity_m_s"].is_f64());
    assert!(json["pressure_drop"]["parts"].is_array());
    assert!(json["criteria"].is_array());
}

#[test]
fn pump_npsh_reference_case() {
    // Suction at atmospheric, water at 20 C, 3 m submergence. With a
    // short suction line the friction loss is small and NPSHa sits just
    // under the frictionless 12.59 + 0.5 = 13.09 m mark.
    let tables = ReferenceTables::standard();
    let input = PumpSizingInput {
        mode: PumpModeInput::SystemSizing,
        fluid: water(),
        flow: measurement(100.0, "m3/h"),
        suction: PumpSide {
            pressure: measurement(101_325.0, "Pa"),
            elevation: measurement(3.0, "m"),
            pipe: PipeInput {
                nominal: "8".into(),
                schedule: "40".into(),
                material: "carbon-steel".into(),
                length: measurement(15.0, "m"),
                fallback_diameter: None,
            },
            fittings: Vec::new(),
        },
        discharge: PumpSide {
            pressure: measurement(101_325.0, "Pa"),
            elevation: measurement(25.0, "m"),
            pipe: PipeInput {
                nominal: "6".into(),
                schedule: "40".into(),
                material: "carbon-steel".into(),
                length: measurement(120.0, "m"),
                fallback_diameter: None,
            },
            fittings: vec![FittingCount {
                fitting: "swing-check-valve".into(),
                count: 1,
            }],
        },
        npsh_required: None,
        efficiency: Some(0.75),
        include_suction_velocity_head: false,
        reciprocating: None,
        viscous: None,
        friction_model: None,
    };
    let result = calculate_pump(&input, &tables).unwrap();

    let npsh = result.npsh.unwrap();
    // (101325 - 2340)/(1000 g) + 3 = 13.09 m, less a small friction loss
    assert!(npsh.available_m > 12.9 && npsh.available_m < 13.1);

    // TDH: 22 m static plus discharge friction
    assert!(result.total_dynamic_head_m > 22.0);
    assert!(result.total_dynamic_head_m < 25.0);

    let sum: f64 = result.head.parts.iter().map(|p| p.value).sum();
    assert!((sum - result.total_dynamic_head_m).abs() < 1e-9);
}

#[test]
fn bundle_round_trip_through_units() {
    let tables = ReferenceTables::standard();
    let input = BundleInput {
        shell_inside: measurement(23.25, "in"),
        tube_od: measurement(19.05, "mm"),
        pitch: measurement(23.8, "mm"),
        pattern: "triangular-30".into(),
        passes: 2,
        head: "fixed-tubesheet".into(),
    };
    let result = calculate_bundle(&input, &tables).unwrap();
    assert!(result.tube_count > 300);
    assert!(result.regression_shell_diameter_m > result.regression_bundle_diameter_m);
}
