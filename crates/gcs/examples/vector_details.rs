//! Walk through the kernel on a small 3D example and print diagnostic blocks.
//!
//! Run: `cargo run -p gcs --example vector_details`

use gcs::prelude::*;

fn main() {
    let src = Point::new([3.0, 2.0, 1.0]);
    let dst = Point::new([9.0, 8.0, 7.0]);
    let v = Vector::between(&src, &dst);

    print!("{}", src.details());
    print!("{}", v.details());

    let x = Vector::new([1.0, 0.0, 0.0]);
    let y = Vector::new([0.0, 1.0, 0.0]);
    println!("x × y = {}", x.cross_product(&y));
    match x.angle(&y) {
        Ok(a) => println!("angle(x, y) = {:.3}°", deg(a)),
        Err(e) => println!("angle(x, y) failed: {e}"),
    }
    println!("endpoint({src}, {v}) = {}", endpoint(&src, &v));
    println!("distance({src}, {dst}) = {:.6}", src.distance(&dst));
}
