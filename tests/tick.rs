use axle_control::{
    sim::{VisualRig, WheelBank, WheelId},
    Axes, Axle, Limits, VehicleControllerInit, WheelPhysics,
};
use glam::DVec3;

const DT: f64 = 0.02;

struct Car {
    bank: WheelBank,
    rig: VisualRig,
    front: [WheelId; 2],
    rear: [WheelId; 2],
}

impl Car {
    fn new() -> Self {
        let mut bank = WheelBank::new();
        let front = [
            bank.add_wheel(DVec3::new(-0.8, 0.3, 1.3)),
            bank.add_wheel(DVec3::new(0.8, 0.3, 1.3)),
        ];
        let rear = [
            bank.add_wheel(DVec3::new(-0.8, 0.3, -1.3)),
            bank.add_wheel(DVec3::new(0.8, 0.3, -1.3)),
        ];

        let mut rig = VisualRig::new();
        for id in front.iter().chain(&rear) {
            rig.attach(*id, 1);
        }

        Self {
            bank,
            rig,
            front,
            rear,
        }
    }

    fn axles(&self) -> Vec<Axle<WheelId>> {
        vec![
            Axle::pair(self.front[0], self.front[1]).with_steering(true),
            Axle::pair(self.rear[0], self.rear[1]).with_motor(true),
        ]
    }
}

fn init() -> VehicleControllerInit {
    VehicleControllerInit {
        limits: Limits::new(160.0, -50.0, 30.0),
        ..Default::default()
    }
}

#[test]
fn full_throttle_drives_rear_axle() {
    let mut car = Car::new();
    let mut ctrl = init().build(car.axles()).unwrap();

    let report = ctrl.tick(DT, &Axes::new(1.0, 0.0), &mut car.bank, &mut car.rig);

    assert_eq!(report.command.motor_torque, 160.0);
    assert_eq!(report.command.steering_angle, 0.0);
    assert!(!report.torque_retained);
    assert_eq!(report.wheels_commanded, 4);
    assert_eq!(report.visuals.synced, 4);
    assert_eq!(report.visuals.missing, 0);

    for id in car.rear {
        assert_eq!(car.bank.wheel(id).motor_torque, 160.0);
    }
    for id in car.front {
        assert_eq!(car.bank.wheel(id).motor_torque, 0.0);
        assert_eq!(car.bank.wheel(id).steer_angle, 0.0);
    }
}

#[test]
fn half_reverse_full_right() {
    let mut car = Car::new();
    let mut ctrl = init().build(car.axles()).unwrap();

    let report = ctrl.tick(DT, &Axes::new(-0.5, 1.0), &mut car.bank, &mut car.rig);

    assert_eq!(report.command.motor_torque, -25.0);
    assert_eq!(report.command.steering_angle, 30.0);
    for id in car.front {
        assert_eq!(car.bank.wheel(id).steer_angle, 30.0);
    }
    for id in car.rear {
        assert_eq!(car.bank.wheel(id).motor_torque, -25.0);
        assert_eq!(car.bank.wheel(id).steer_angle, 0.0);
    }
}

#[test]
fn steering_axle_never_gets_torque() {
    let mut car = Car::new();
    let mut ctrl = init().build(car.axles()).unwrap();

    ctrl.tick(DT, &Axes::new(1.0, -1.0), &mut car.bank, &mut car.rig);
    car.bank.set_motor_torque(car.front[0], 7.0);
    ctrl.tick(DT, &Axes::new(0.5, 0.5), &mut car.bank, &mut car.rig);

    assert_eq!(car.bank.wheel(car.front[0]).motor_torque, 7.0);
    assert_eq!(car.bank.wheel(car.front[1]).motor_torque, 0.0);
    assert_eq!(car.bank.wheel(car.front[0]).steer_angle, 15.0);
}

#[test]
fn axle_order_does_not_change_wheel_state() {
    let inputs = [(1.0, 0.2), (-0.3, -0.9), (0.6, 1.0)];

    let mut forward = Car::new();
    let mut reversed = Car::new();
    let mut ctrl_a = init().build(forward.axles()).unwrap();
    let mut axles = reversed.axles();
    axles.reverse();
    let mut ctrl_b = init().build(axles).unwrap();

    for (v, h) in inputs {
        let axes = Axes::new(v, h);
        ctrl_a.tick(DT, &axes, &mut forward.bank, &mut forward.rig);
        ctrl_b.tick(DT, &axes, &mut reversed.bank, &mut reversed.rig);
    }

    for id in forward.front.iter().chain(&forward.rear) {
        let a = forward.bank.wheel(*id);
        let b = reversed.bank.wheel(*id);
        assert_eq!(a.motor_torque, b.motor_torque);
        assert_eq!(a.steer_angle, b.steer_angle);
    }
}

#[test]
fn one_sided_axle_still_updates_present_wheel() {
    let mut car = Car::new();
    let axles = vec![
        Axle::new(None, Some(car.front[1])).with_steering(true),
        Axle::new(Some(car.rear[0]), None).with_motor(true),
    ];
    let mut ctrl = init().build(axles).unwrap();

    let report = ctrl.tick(DT, &Axes::new(0.25, -0.5), &mut car.bank, &mut car.rig);

    assert_eq!(report.wheels_commanded, 2);
    assert_eq!(report.visuals.synced, 2);
    assert_eq!(car.bank.wheel(car.front[1]).steer_angle, -15.0);
    assert_eq!(car.bank.wheel(car.rear[0]).motor_torque, 40.0);
    assert_eq!(car.bank.wheel(car.front[0]).steer_angle, 0.0);
    assert_eq!(car.bank.wheel(car.rear[1]).motor_torque, 0.0);
}

#[test]
fn out_of_range_torque_keeps_previous() {
    let mut car = Car::new();
    let mut ctrl = init().build(car.axles()).unwrap();

    ctrl.tick(DT, &Axes::new(0.75, 0.0), &mut car.bank, &mut car.rig);
    let report = ctrl.tick(DT, &Axes::raw(-3.0, 0.0), &mut car.bank, &mut car.rig);

    assert!(report.torque_retained);
    assert_eq!(report.command.motor_torque, 120.0);
    assert_eq!(car.bank.wheel(car.rear[0]).motor_torque, 120.0);

    let report = ctrl.tick(DT, &Axes::raw(f64::NAN, 0.0), &mut car.bank, &mut car.rig);
    assert!(report.torque_retained);
    assert_eq!(ctrl.command().motor_torque, 120.0);
}

#[test]
fn visuals_mirror_resolved_pose() {
    let mut car = Car::new();
    let mut ctrl = init().build(car.axles()).unwrap();

    for _ in 0..5 {
        ctrl.tick(DT, &Axes::new(1.0, 0.4), &mut car.bank, &mut car.rig);
    }

    for id in car.front.iter().chain(&car.rear) {
        let pose = car.bank.world_pose(*id);
        let visual = car.rig.visual(*id, 0).unwrap();
        assert_eq!(visual.position, pose.position);
        assert_eq!(visual.rotation, pose.rotation);
    }
    // the rear wheels have spun during this tick's resolve
    assert!(car.bank.wheel(car.rear[0]).spin_angle > 0.0);
}

#[test]
fn missing_visual_child_is_skipped() {
    let mut car = Car::new();
    let init = VehicleControllerInit {
        visual_child_index: 1,
        ..init()
    };
    let mut ctrl = init.build(car.axles()).unwrap();
    car.rig.attach(car.front[0], 2);

    let report = ctrl.tick(DT, &Axes::new(1.0, 1.0), &mut car.bank, &mut car.rig);

    assert_eq!(report.visuals.synced, 1);
    assert_eq!(report.visuals.missing, 3);
    assert_eq!(report.wheels_commanded, 4);
    assert_eq!(
        car.rig.visual(car.front[0], 1).unwrap().position,
        DVec3::new(-0.8, 0.3, 1.3)
    );
}

#[test]
fn visual_child_index_changes_live() {
    let mut car = Car::new();
    let mut ctrl = init().build(car.axles()).unwrap();
    for id in car.front.iter().chain(&car.rear) {
        car.rig.attach(*id, 3);
    }

    ctrl.tick(DT, &Axes::new(0.0, 0.5), &mut car.bank, &mut car.rig);
    assert!((ctrl.steer_ratio() - 0.5).abs() < 1e-12);
    assert_eq!(car.rig.visual(car.front[0], 2).unwrap().position, DVec3::ZERO);

    ctrl.set_visual_child_index(2);
    let report = ctrl.tick(DT, &Axes::new(0.0, -1.0), &mut car.bank, &mut car.rig);

    assert_eq!(ctrl.visual_child_index(), 2);
    assert_eq!(report.visuals.synced, 4);
    assert_eq!(ctrl.steer_ratio(), -1.0);
    assert_eq!(
        car.rig.visual(car.front[0], 2).unwrap().position,
        DVec3::new(-0.8, 0.3, 1.3)
    );
}

#[test]
fn live_limit_change_applies_next_tick() {
    let mut car = Car::new();
    let mut ctrl = init().build(car.axles()).unwrap();

    ctrl.tick(DT, &Axes::new(1.0, 1.0), &mut car.bank, &mut car.rig);
    ctrl.set_limits(&Limits::new(400.0, -80.0, 45.0)).unwrap();
    let report = ctrl.tick(DT, &Axes::new(1.0, 1.0), &mut car.bank, &mut car.rig);

    assert_eq!(report.command.motor_torque, 400.0);
    assert_eq!(report.command.steering_angle, 45.0);
    assert!((report.elapsed_sec - 2.0 * DT).abs() < 1e-12);
}

#[test]
#[should_panic]
fn zero_time_step_panics() {
    let mut car = Car::new();
    let mut ctrl = init().build(car.axles()).unwrap();
    ctrl.tick(0.0, &Axes::default(), &mut car.bank, &mut car.rig);
}
