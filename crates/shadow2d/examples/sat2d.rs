use shadow2d::math::Real;
use shadow2d::query::sat::{polygon_polygon_find_separating_axis, SatOptions};
use shadow2d::shape::Polygon;
use shadow2d::utils::full_atan;

const WIDTH: Real = 3000.0;
const HEIGHT: Real = 2000.0;
const SHIFT_INCREMENT: Real = 50.0;

fn main() {
    /*
     * Initialize the shapes.
     */
    let quads = [
        (
            "convex quad",
            [1941.5857, 2541.5857, 2341.5857, 2141.5857],
            [781.67737, 981.67737, 1381.6774, 1281.6774],
        ),
        (
            "concave quad",
            [1729.0559, 2129.0559, 1929.0559, 2029.0559],
            [821.30156, 921.30156, 1071.3016, 1521.3016],
        ),
        (
            "cursor",
            [1793.8955, 1993.8955, 1993.8955, 2193.8955],
            [857.32355, 1257.3236, 1057.3236, 1157.3236],
        ),
    ];

    for (name, xs, ys) in quads {
        let quad = Polygon::from_columns(&xs, &ys).expect("a quad has four vertices");
        let kind = if quad.is_concave() { "concave" } else { "convex" };
        println!("{name}: {kind}");
    }

    /*
     * Push two squares toward each other along the direction of the cursor.
     */
    let cursor = (WIDTH * 0.75, HEIGHT * 0.5);
    let angle = full_atan(cursor.0 - WIDTH / 2.0, cursor.1 - HEIGHT / 2.0, false);
    let step = SHIFT_INCREMENT * angle.cos();

    for i in 0..25 {
        let shift = step * i as Real;
        let left = Polygon::from_columns(
            &[
                WIDTH / 2.0 - 1000.0 + shift,
                WIDTH / 2.0 - 500.0 + shift,
                WIDTH / 2.0 - 500.0 + shift,
                WIDTH / 2.0 - 1000.0 + shift,
            ],
            &[
                HEIGHT / 2.0 - 250.0,
                HEIGHT / 2.0 - 250.0,
                HEIGHT / 2.0 + 250.0,
                HEIGHT / 2.0 + 250.0,
            ],
        )
        .expect("a square has four vertices");
        let right = Polygon::from_columns(
            &[
                WIDTH / 2.0 + 1000.0 - shift,
                WIDTH / 2.0 + 1000.0 - shift,
                WIDTH / 2.0 + 500.0 - shift,
                WIDTH / 2.0 + 500.0 - shift,
            ],
            &[
                HEIGHT / 2.0 + 250.0,
                HEIGHT / 2.0 - 250.0,
                HEIGHT / 2.0 - 250.0,
                HEIGHT / 2.0 + 250.0,
            ],
        )
        .expect("a square has four vertices");

        match polygon_polygon_find_separating_axis(
            left.vertices(),
            right.vertices(),
            &SatOptions::default(),
        ) {
            Some(axis) => println!("shift {shift}: separated along {axis:?}"),
            None => println!("shift {shift}: colliding"),
        }
    }
}
