use lwfa_core::units::{FEMTOSECOND, JOULE, MICROMETER, MILLIMETER, PER_CM3, TERAWATT};
use lwfa_core::{
    BubbleRadius, GaussianBeam, Laser, LwfaError, PhysicalConstants, Plasma, PlasmaOptions,
    PowerConstraint, PulseConstraint, Quantity, SimulationOptions, SimulationResolution,
    matched_laser_plasma,
};

fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

fn cetal_laser(constants: &PhysicalConstants) -> Laser {
    let beam = GaussianBeam::from_waist(
        Quantity::new(18.0, MICROMETER),
        Quantity::new(0.8, MICROMETER),
    )
    .expect("beam");
    Laser::new(
        constants,
        Quantity::new(7.7, JOULE),
        Quantity::new(40.0, FEMTOSECOND),
        beam,
    )
    .expect("laser")
}

#[test]
fn cetal_laser_in_plasma_yields_bounded_efficiency() {
    let constants = PhysicalConstants::codata_2018();
    let laser = cetal_laser(&constants);
    let a0 = laser.a0().expect("waist gives a0");
    assert!(relative_error(a0, 4.077) < 5.0e-3, "a0 = {a0}");

    let plasma = Plasma::with_laser(
        &constants,
        Quantity::new(1.5e18, PER_CM3),
        laser,
        PlasmaOptions {
            bubble_radius: Some(BubbleRadius::Estimated),
            propagation_distance: None,
        },
    )
    .expect("plasma");

    let estimate = plasma.estimated_bubble_radius().expect("estimate");
    assert_eq!(plasma.bubble_radius(), Some(estimate));
    let efficiency = plasma.bunch().expect("bunch").efficiency;
    assert!(efficiency.is_finite() && efficiency > 0.0 && efficiency < 1.0);
}

#[test]
fn matched_configuration_accelerates_over_dephasing_length() {
    let constants = PhysicalConstants::codata_2018();
    let matched =
        matched_laser_plasma(&constants, 3.1, Quantity::new(0.8, MICROMETER)).expect("matched");
    let plasma = matched.plasma();

    assert_eq!(plasma.acceleration_length(), plasma.dephasing_length());
    assert!(matched.within_validity());
    assert!(relative_error(matched.critical_a0(), 33.840_302_008_108_62) < 1.0e-9);
    assert!(
        relative_error(
            plasma.density().to(PER_CM3).expect("cm^-3"),
            6.084_566_436_385_998e18
        ) < 1.0e-9
    );
}

#[test]
fn matched_configuration_feeds_the_simulation_estimator() {
    let constants = PhysicalConstants::codata_2018();
    let matched =
        matched_laser_plasma(&constants, 3.1, Quantity::new(0.8, MICROMETER)).expect("matched");
    let simulation =
        SimulationResolution::new(&constants, matched.into_plasma(), SimulationOptions::default())
            .expect("simulation");

    let (nx, ny, nz) = simulation.cell_counts();
    assert_eq!((nx, ny), (251, 251));
    assert_eq!(nz, 1353);
    assert_eq!(simulation.step_count(), 37_551);
}

#[test]
fn plasma_without_laser_cannot_be_resolved() {
    let constants = PhysicalConstants::codata_2018();
    let plasma = Plasma::new(&constants, Quantity::new(1.5e18, PER_CM3)).expect("plasma");
    assert!(plasma.drive().is_none());
    assert_eq!(
        SimulationResolution::new(&constants, plasma, SimulationOptions::default()),
        Err(LwfaError::MissingLaser)
    );
}

#[test]
fn alternative_constructors_agree_on_the_same_pulse() {
    let constants = PhysicalConstants::codata_2018();
    let reference = cetal_laser(&constants);
    let wavelength = reference.wavelength();

    let by_a0 = Laser::from_a0(
        &constants,
        reference.a0().expect("a0"),
        GaussianBeam::wavelength_only(wavelength).expect("beam"),
        PulseConstraint::EnergyAndDuration {
            energy: reference.energy(),
            duration: reference.duration(),
        },
    )
    .expect("from a0");
    let waist = by_a0.beam().waist().expect("synthesized waist");
    assert!(relative_error(waist.to(MICROMETER).expect("um"), 18.0) < 1.0e-9);

    let by_power = Laser::from_power(
        &constants,
        Quantity::new(reference.power().to(TERAWATT).expect("TW"), TERAWATT),
        *reference.beam(),
        PowerConstraint::Energy(reference.energy()),
    )
    .expect("from power");
    assert!(
        by_power
            .duration()
            .is_close(reference.duration(), 1.0e-9)
            .expect("durations compare")
    );

    let by_intensity = Laser::from_intensity(
        &constants,
        reference.intensity().expect("intensity"),
        *reference.beam(),
        PulseConstraint::DurationAndBeam {
            duration: reference.duration(),
        },
    )
    .expect("from intensity");
    assert!(
        by_intensity
            .energy()
            .is_close(reference.energy(), 1.0e-9)
            .expect("energies compare")
    );
}

#[test]
fn explicit_propagation_distance_caps_the_energy_gain() {
    let constants = PhysicalConstants::codata_2018();
    let plasma = Plasma::with_laser(
        &constants,
        Quantity::new(1.5e18, PER_CM3),
        cetal_laser(&constants),
        PlasmaOptions {
            bubble_radius: None,
            propagation_distance: Some(Quantity::new(3.0, MILLIMETER)),
        },
    )
    .expect("plasma");

    let length = plasma.acceleration_length().expect("drive");
    assert!(relative_error(length.to(MILLIMETER).expect("mm"), 3.0) < 1.0e-12);
    assert!(plasma.bunch().is_none());
    assert!(plasma.bubble_radius().is_none());
}
