use leadflow_domain::RowId;
use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

/// Appends the record built for the next row and returns that row. Row 1
/// holds the header like in a sheet.
pub fn insert_with_row<T, F: FnOnce(RowId) -> T>(collection: &Mutex<Vec<T>>, build: F) -> RowId {
    let mut collection = collection.lock().unwrap();
    let row = RowId(collection.len() as u32 + 2);
    collection.push(build(row));
    row
}

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn find_all<T: Clone>(collection: &Mutex<Vec<T>>) -> Vec<T> {
    collection.lock().unwrap().clone()
}

/// Applies `update` to the first item matching `compare`. Returns `false`
/// when nothing matched.
pub fn update_by<T, F: Fn(&T) -> bool, U: FnOnce(&mut T)>(
    collection: &Mutex<Vec<T>>,
    compare: F,
    update: U,
) -> bool {
    let mut collection = collection.lock().unwrap();
    match collection.iter_mut().find(|item| compare(item)) {
        Some(item) => {
            update(item);
            true
        }
        None => false,
    }
}
