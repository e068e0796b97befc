//! Bracket access, adding and deleting properties, iterating over keys

use std::io::{self, Write};

use seqops::{record, Console, PropertyKey, Record, Value};
use settings::Settings;

use super::heading;

/// Reads a property the way bracket access does, absent properties are `undefined`
fn lookup<K: Into<PropertyKey>>(record: &Record<Value>, key: K) -> Value {
    record.get(key).cloned().unwrap_or_default()
}

pub(super) fn run<W: Write>(console: &mut Console<W>, settings: &Settings) -> io::Result<()> {
    let mut person: Record<Value> = record! {
        "full name" => "Alice Smith",
        "age" => 25,
        1 => "one",
    };

    heading(console, settings, "bracket access")?;

    // Neither key could be used with dot notation
    console.log(&lookup(&person, "full name"))?;
    console.log(&lookup(&person, 1))?;

    let key = "age";
    console.log(&lookup(&person, key))?;

    heading(console, settings, "adding and deleting properties")?;

    person.set("email", Value::from("@email"));
    console.log(&person)?;

    person.delete("email");
    console.log(&person)?;

    heading(console, settings, "iterating over keys")?;

    for key in person.keys() {
        console.log(&format!("key:  {key}"))?;
        console.log_entry(key, &lookup(&person, key))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use settings::Lesson;

    use crate::lessons::output_of;

    #[test]
    fn objects_output() {
        let expected = r#"Alice Smith
one
25
{ "full name": "Alice Smith", age: 25, "1": "one", email: "@email" }
{ "full name": "Alice Smith", age: 25, "1": "one" }
key:  full name
full name: Alice Smith
key:  age
age: 25
key:  1
1: one
"#;

        assert_eq!(output_of(Lesson::Objects, false), expected);
    }
}
