use leaper_tour::geometry::{Direction, MoveList, Rotation, DIRECTIONS};

#[test]
fn north_list_has_ascending_compass_angles() {
    let list = MoveList::for_direction(Direction::N);
    let angles: Vec<i32> = list.moves().iter().map(|m| m.angle).collect();
    assert_eq!(angles, vec![0, 45, 90, 135, 180, 225, 270, 315]);
    for (i, m) in list.moves().iter().enumerate() {
        assert_eq!((m.dx, m.dy), DIRECTIONS[i].delta());
    }
}

#[test]
fn every_start_direction_leads_its_own_list() {
    for dir in DIRECTIONS {
        let list = MoveList::for_direction(dir);
        let first = list.moves()[0];
        assert_eq!((first.dx, first.dy), dir.delta(), "{dir} must come first");
        let angles: Vec<i32> = list.moves().iter().map(|m| m.angle).collect();
        assert_eq!(angles, vec![0, 45, 90, 135, 180, 225, 270, 315]);
    }
}

#[test]
fn east_list_relabels_north() {
    let list = MoveList::for_direction(Direction::E);
    let (dx, dy) = Direction::N.delta();
    // North is six ring steps past east, so it carries the relabeled angle.
    assert_eq!(list.find_delta(dx, dy).unwrap().angle, 270);
}

#[test]
fn find_delta_rejects_foreign_displacements() {
    let list = MoveList::for_direction(Direction::N);
    assert!(list.find_delta(1, 1).is_none());
    assert!(list.find_delta(0, 0).is_none());
    assert!(list.find_delta(3, 3).is_none());
}

#[test]
fn direction_labels_round_trip_case_insensitively() {
    for dir in DIRECTIONS {
        assert_eq!(dir.label().parse::<Direction>().unwrap(), dir);
        assert_eq!(
            dir.label().to_lowercase().parse::<Direction>().unwrap(),
            dir
        );
    }
    assert!("NNE".parse::<Direction>().is_err());
    assert!("".parse::<Direction>().is_err());
}

#[test]
fn rotation_labels_round_trip() {
    assert_eq!(
        "clockwise".parse::<Rotation>().unwrap(),
        Rotation::Clockwise
    );
    assert_eq!(
        "ANTICLOCKWISE".parse::<Rotation>().unwrap(),
        Rotation::Anticlockwise
    );
    assert!("widdershins".parse::<Rotation>().is_err());
}
