use inplace_vec::{Error, InplaceVec};

fn main() -> Result<(), Error> {
    let mut v = InplaceVec::<i32, 8>::new();

    for i in 1..=5 {
        v.push(i)?;
    }

    println!("Vector: {v:?}");
    println!("Sum: {}", v.iter().sum::<i32>());

    v.retain(|x| *x % 2 == 0);
    println!("Even numbers: {v:?}");

    v.insert_range(1, [10, 20, 30])?;
    println!("After insert_range: {v:?}");

    let mut rest = v.try_append_range(100..);
    println!("Filled to capacity: {v:?}, next unused: {:?}", rest.next());

    match v.push(0) {
        Ok(_) => unreachable!("the vector is full"),
        Err(e) => println!("push on a full vector: {e}"),
    }

    Ok(())
}
