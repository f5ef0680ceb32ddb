//! Declare a record, generate its structure-of-arrays container and use the
//! generic algorithms on it.

use soa_slice::soa_slice;

soa_slice! {
    /// A user record. Each field gets its own column in `UserSlice`.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct User {
        pub id: u64,
        pub name: String,
        deleted: bool,
    }

    /// Structure-of-arrays container for [`User`].
    #[derive(Debug)]
    pub struct UserSlice;
}

fn main() {
    soa_slice::init();

    let s: UserSlice = soa_slice::make(0, 4);
    let s = soa_slice::append(
        s,
        [
            User { id: 1, name: "Alice".into(), deleted: false },
            User { id: 2, name: "Bob".into(), deleted: true },
            User { id: 3, name: "Charlie".into(), deleted: false },
            User { id: 4, name: "Dave".into(), deleted: true },
        ],
    );

    for (i, u) in soa_slice::all(&s) {
        println!("{} {:?}", i, u);
    }

    // Only the `name` column is touched here.
    println!("names: {:?}", s.name);

    let active = soa_slice::delete_func(s, |u| u.deleted);
    println!("active: {:?}", soa_slice::values(&active).map(|u| u.name).collect::<Vec<_>>());
}
