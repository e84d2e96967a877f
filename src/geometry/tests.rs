#[cfg(test)]
mod unit {
    use crate::geometry::{
        circle_from_three, circle_from_two, closest_point_on_circle, distance, interpolate,
        is_acute_triangle, is_point_on_circle, smallest_enclosing_circle, Circle, Coordinates,
    };
    use crate::rng::SimRng;

    #[test]
    fn distance_is_euclidean() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(3.0, 4.0);
        assert_eq!(distance(&a, &b), 5.0);
    }

    #[test]
    fn interpolate_is_unclamped() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(10.0, 0.0);
        assert_eq!(interpolate(&a, &b, 0.5), Coordinates::new(5.0, 0.0));
        assert_eq!(interpolate(&a, &b, 2.0), Coordinates::new(20.0, 0.0));
    }

    #[test]
    fn circle_from_two_is_midpoint_diameter() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(4.0, 0.0);
        let c = circle_from_two(&a, &b);
        assert_eq!(c.center, Coordinates::new(2.0, 0.0));
        assert_eq!(c.radius, 2.0);
    }

    #[test]
    fn circle_from_three_rejects_collinear() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(1.0, 1.0);
        let c = Coordinates::new(2.0, 2.0);
        assert!(circle_from_three(&a, &b, &c).is_err());
    }

    #[test]
    fn circle_from_three_right_triangle() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(2.0, 0.0);
        let c = Coordinates::new(0.0, 2.0);
        let circle = circle_from_three(&a, &b, &c).unwrap();
        assert!((circle.center.x - 1.0).abs() < 1e-9);
        assert!((circle.center.y - 1.0).abs() < 1e-9);
        assert!((circle.radius - 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn acute_triangle_detection() {
        // Equilateral triangle: acute.
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(2.0, 0.0);
        let c = Coordinates::new(1.0, 3f64.sqrt());
        assert!(is_acute_triangle(&a, &b, &c));

        // Right triangle: not acute.
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(2.0, 0.0);
        let c = Coordinates::new(0.0, 2.0);
        assert!(!is_acute_triangle(&a, &b, &c));
    }

    #[test]
    fn point_on_circle_threshold() {
        let circle = Circle::new(Coordinates::zero(), 5.0);
        let p = Coordinates::new(5.0, 0.0);
        assert!(is_point_on_circle(&p, &circle, 5));
        let q = Coordinates::new(5.1, 0.0);
        assert!(!is_point_on_circle(&q, &circle, 5));
    }

    #[test]
    fn closest_point_on_circle_is_idempotent() {
        let circle = Circle::new(Coordinates::new(1.0, 1.0), 3.0);
        let p = Coordinates::new(10.0, -4.0);
        let once = closest_point_on_circle(&circle, &p);
        let twice = closest_point_on_circle(&circle, &once);
        assert!(distance(&once, &twice) < 1e-9);
    }

    #[test]
    fn closest_point_on_circle_degenerate_center_uses_sentinel() {
        let circle = Circle::new(Coordinates::new(2.0, 2.0), 3.0);
        let result = closest_point_on_circle(&circle, &circle.center);
        assert_eq!(result, Coordinates::new(5.0, 2.0));
    }

    #[test]
    fn sec_of_square_is_circumscribed_circle() {
        let points = vec![
            Coordinates::new(0.0, 0.0),
            Coordinates::new(10.0, 0.0),
            Coordinates::new(10.0, 10.0),
            Coordinates::new(0.0, 10.0),
        ];
        let mut rng = SimRng::from_seed(1);
        let circle = smallest_enclosing_circle(&points, &mut rng);
        assert!(distance(&circle.center, &Coordinates::new(5.0, 5.0)) < 1e-6);
        assert!((circle.radius - 5.0 * 2f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn sec_is_permutation_invariant() {
        let points = vec![
            Coordinates::new(0.0, 0.0),
            Coordinates::new(3.0, 1.0),
            Coordinates::new(10.0, 0.0),
            Coordinates::new(10.0, 10.0),
            Coordinates::new(0.0, 10.0),
            Coordinates::new(4.0, 5.0),
        ];
        let mut reversed = points.clone();
        reversed.reverse();

        let mut rng_a = SimRng::from_seed(11);
        let mut rng_b = SimRng::from_seed(97);
        let circle_a = smallest_enclosing_circle(&points, &mut rng_a);
        let circle_b = smallest_enclosing_circle(&reversed, &mut rng_b);

        assert!(distance(&circle_a.center, &circle_b.center) < 1e-6);
        assert!((circle_a.radius - circle_b.radius).abs() < 1e-6);
    }

    #[test]
    fn sec_base_cases() {
        let mut rng = SimRng::from_seed(5);
        let empty = smallest_enclosing_circle(&[], &mut rng);
        assert_eq!(empty.radius, 0.0);

        let one = smallest_enclosing_circle(&[Coordinates::new(3.0, 4.0)], &mut rng);
        assert_eq!(one.radius, 0.0);
        assert_eq!(one.center, Coordinates::new(3.0, 4.0));
    }
}
