//! Print the derived measures of a few polygons and how they compare.
//!
//! Usage:
//!   cargo run -p regpoly --example tour

use regpoly::prelude::*;

fn main() -> Result<(), PolygonError> {
    let p = Polygon::new(3, 9.3)?;
    println!("{p}");
    println!("{p} has {} edges.", p.number_of_edges());
    println!("{p} has {} vertices.", p.number_of_vertices());
    println!("{p} has {} circumradius.", p.circumradius());
    println!("{p} has {} edge length.", p.edge_length());
    println!("{p} has {} apothem.", p.apothem());
    println!("{p} has {} area.", p.area());
    println!("{p} has {} perimeter.", p.perimeter());
    println!("{p} has {} interior angle.", p.interior_angle());

    let t1 = Polygon::new(3, 9.3)?;
    let t2 = Polygon::new(3, 9.3)?;
    let t3 = Polygon::new(3, 9.4)?;
    let t4 = Polygon::new(4, 9.4)?;
    println!("{t1} == {t2}: {}", t1 == t2);
    println!("{t1} == {t3}: {}", t1 == t3);
    println!("{t1} > {t2}: {}", t1 > t2);
    println!("{t4} > {t1}: {}", t4 > t1);
    println!("{t1} < {t4}: {}", t1 < t4);
    match t1.try_eq(&9.3_f64) {
        Ok(eq) => println!("{t1} == 9.3: {eq}"),
        Err(err) => println!("{t1} == 9.3: {err}"),
    }
    Ok(())
}
