//! `splice`, `slice` and the transforming methods

use std::io::{self, Write};

use seqops::{Console, Number, Sequence, Value};
use settings::Settings;

use super::heading;

fn one_to_five() -> Sequence<i32> {
    Sequence::from([1, 2, 3, 4, 5])
}

pub(super) fn run<W: Write>(console: &mut Console<W>, settings: &Settings) -> io::Result<()> {
    splice(console, settings)?;
    slice(console, settings)?;
    aliasing(console, settings)?;
    transforming(console, settings)?;
    Ok(())
}

fn splice<W: Write>(console: &mut Console<W>, settings: &Settings) -> io::Result<()> {
    heading(console, settings, "splice()")?;

    // Remove one element at index 2
    let mut arr1 = one_to_five();
    arr1.splice(2, Some(1), []);
    console.log(&arr1)?;

    // Insert 99 at index 2 without removing anything
    let mut arr2 = one_to_five();
    arr2.splice(2, Some(0), [99]);
    console.log(&arr2)?;

    let mut arr3 = one_to_five();
    arr3.splice(1, Some(2), [99, 100]);
    console.log(&arr3)?;

    // Remove everything from index 2 onwards
    let mut arr4 = one_to_five();
    arr4.splice(2, None, []);
    console.log(&arr4)?;

    let mut arr5 = one_to_five();
    let removed = arr5.splice(1, Some(2), []);
    console.log(&arr5)?;
    console.log(&removed)
}

fn slice<W: Write>(console: &mut Console<W>, settings: &Settings) -> io::Result<()> {
    heading(console, settings, "slice()")?;

    let arr1 = one_to_five();
    console.log(&arr1.slice(Some(1), Some(3)))?;
    console.log(&arr1)?;

    let arr2 = one_to_five();
    console.log(&arr2.slice(Some(2), None))?;

    // The last three elements
    let arr3 = one_to_five();
    console.log(&arr3.slice(Some(-3), None))?;

    let arr4 = one_to_five();
    console.log(&arr4.slice(None, None))
}

/// A second binding to the same array is not a copy
fn aliasing<W: Write>(console: &mut Console<W>, settings: &Settings) -> io::Result<()> {
    heading(console, settings, "assignment shares the array")?;

    let arr5 = Value::sequence(one_to_five());
    let copy5 = arr5.clone();

    if let Some(sequence) = arr5.as_sequence() {
        sequence.borrow_mut().push(Value::from(6));
    }

    console.log(&arr5)?;
    console.log(&copy5)
}

fn transforming<W: Write>(console: &mut Console<W>, settings: &Settings) -> io::Result<()> {
    heading(console, settings, "transforming arrays")?;

    let fruits = Sequence::from(["apple", "banana", "orange"].map(Value::from));

    // Pushing an array nests it instead of appending its elements
    let mut basket = fruits.slice(None, None);
    basket.push(Value::sequence(["pear", "peach"]));
    console.log(&basket)?;

    let lengths = fruits.map(|fruit, _| fruit.length().unwrap_or_default());
    console.log(&lengths)?;

    let long_fruits = fruits.filter(|fruit, _| fruit.length().is_some_and(|length| length > 5));
    console.log(&long_fruits)?;

    let total_length = fruits.fold(Number::ONE, |sum, fruit, _| {
        sum.add(fruit.length().unwrap_or_default().into())
    });
    console.log(&Value::from(total_length))?;

    let mut result = Ok(());
    fruits.for_each(|fruit, index| {
        if result.is_ok() {
            result = console.log_indexed(index, fruit);
        }
    });
    result
}

#[cfg(test)]
mod tests {
    use settings::Lesson;

    use crate::lessons::output_of;

    #[test]
    fn arrays_output() {
        let expected = "\
[1, 2, 4, 5]
[1, 2, 99, 3, 4, 5]
[1, 99, 100, 4, 5]
[1, 2]
[1, 4, 5]
[2, 3]
[2, 3]
[1, 2, 3, 4, 5]
[3, 4, 5]
[3, 4, 5]
[1, 2, 3, 4, 5]
[1, 2, 3, 4, 5, 6]
[1, 2, 3, 4, 5, 6]
[\"apple\", \"banana\", \"orange\", [\"pear\", \"peach\"]]
[5, 6, 6]
[\"banana\", \"orange\"]
18
0: apple
1: banana
2: orange
";

        assert_eq!(output_of(Lesson::Arrays, false), expected);
    }
}
