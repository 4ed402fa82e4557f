//! The narrated walkthrough
//!
//! [`run`] writes each demonstration block, in the order listed by [`titles`], to any
//! [`Write`]. The `primer` binary runs it against stdout and then waits for Enter with [`pause`].

use crate::{delay, Error, Publisher, Result, Scoped, Sequence};
use event_listener::Listener;
use futures_lite::StreamExt;
use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::{self, Debug, Display, Formatter},
    io::{self, BufRead, Write},
    sync::mpsc,
    time::Duration,
};

const SECTION_COUNT: usize = 11;

type Section<W> = (&'static str, fn(&mut W, &Config) -> Result<()>);

fn sections<W: Write>() -> [Section<W>; SECTION_COUNT] {
    [
        ("Primitive types", |out, _| primitives(out)),
        ("Collections", |out, _| collections(out)),
        ("Control flow", |out, _| control_flow(out)),
        ("Structs, traits and enums", |out, _| structs_traits_enums(out)),
        ("Error handling", |out, _| error_handling(out)),
        ("Closures and iterator queries", |out, _| closures(out)),
        ("Asynchronous delay", |out, config| asynchronous(out, config.delay)),
        ("Events", |out, _| events(out)),
        ("Generics", |out, _| generics(out)),
        ("Scoped resources", |out, _| scoped_resources(out)),
        ("Lazy sequences", |out, _| lazy_sequences(out)),
    ]
}

/// The heading of every demonstration block, in the order [`run`] prints them
#[must_use]
pub fn titles() -> [&'static str; SECTION_COUNT] {
    sections::<io::Sink>().map(|(title, _)| title)
}

/// Options for [`run`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// How long the asynchronous delay block waits
    pub delay: Duration,
    /// Whether the binary waits for Enter once the tour is done
    pub pause_at_end: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            pause_at_end: true,
        }
    }
}

impl Config {
    /// Chainable setter for [`Config::delay`]
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Chainable setter for [`Config::pause_at_end`]
    #[must_use]
    pub fn with_pause_at_end(mut self, pause_at_end: bool) -> Self {
        self.pause_at_end = pause_at_end;
        self
    }
}

/// Divide `dividend` by `divisor`, reporting a zero divisor as [`Error::DivideByZero`].
///
/// # Errors
///
/// Returns [`Error::DivideByZero`] when `divisor` is zero.
pub fn checked_divide(dividend: i32, divisor: i32) -> Result<i32> {
    if divisor == 0 {
        return Err(Error::DivideByZero { dividend });
    }
    // i32::MIN / -1 overflows; saturate rather than panic
    Ok(dividend.checked_div(divisor).unwrap_or(i32::MAX))
}

/// Write every demonstration block to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails, or if the delay's runtime cannot be started.
pub fn run<W: Write>(out: &mut W, config: &Config) -> Result<()> {
    for (index, (title, section)) in sections::<W>().into_iter().enumerate() {
        log::debug!("section {index}: {title}");
        writeln!(out, "== {title} ==")?;
        section(out, config)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Prompt on `out` and wait for a single line of `input`.
///
/// # Errors
///
/// Returns an error if writing the prompt or reading the line fails.
pub fn pause<R: BufRead, W: Write>(mut input: R, out: &mut W) -> Result<()> {
    write!(out, "Press Enter to exit...")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

fn primitives<W: Write>(out: &mut W) -> Result<()> {
    let integer: i32 = 42;
    let big: u64 = 9_000_000_000;
    let float: f64 = 2.5;
    let flag = true;
    let letter = 'R';
    let text = "hello";

    writeln!(out, "i32: {integer}, u64: {big}, f64: {float}")?;
    writeln!(out, "bool: {flag}, char: {letter}, &str: {text}")?;
    writeln!(out, "i32 range: {}..={}", i32::MIN, i32::MAX)?;
    writeln!(out, "u8 255 + 1 checked: {:?}", 255_u8.checked_add(1))?;
    writeln!(out, "u8 255 + 1 wrapping: {}", 255_u8.wrapping_add(1))?;
    writeln!(out, "f64 truncated: {}", float.trunc())?;
    Ok(())
}

fn collections<W: Write>(out: &mut W) -> Result<()> {
    let mut numbers = vec![3, 1, 2];
    numbers.push(4);
    numbers.sort_unstable();
    writeln!(out, "Vec: {numbers:?}, first: {:?}", numbers.first())?;

    let mut ages = BTreeMap::new();
    ages.insert("Alice", 30);
    ages.insert("Bob", 25);
    *ages.entry("Bob").or_insert(0) += 1;
    for (name, age) in &ages {
        writeln!(out, "Map: {name} is {age}")?;
    }

    let unique: BTreeSet<_> = ["a", "b", "a", "c"].into_iter().collect();
    writeln!(out, "Set: {unique:?}")?;

    let mut queue: VecDeque<_> = (1..=3).collect();
    queue.push_front(0);
    writeln!(out, "Deque: {queue:?}")?;
    let popped = queue.pop_back();
    writeln!(out, "Deque after pop_back: {queue:?}, popped: {popped:?}")?;
    Ok(())
}

fn control_flow<W: Write>(out: &mut W) -> Result<()> {
    let number = 7;
    if number % 2 == 0 {
        writeln!(out, "{number} is even")?;
    } else {
        writeln!(out, "{number} is odd")?;
    }

    let size = match number {
        0 => "zero",
        1..=5 => "small",
        _ => "large",
    };
    writeln!(out, "{number} is {size}")?;

    for i in 0..3 {
        writeln!(out, "for: {i}")?;
    }

    let mut countdown = 3;
    while countdown > 0 {
        writeln!(out, "while: {countdown}")?;
        countdown -= 1;
    }

    let mut attempts = 0;
    let found = loop {
        attempts += 1;
        if attempts * attempts > 10 {
            break attempts;
        }
    };
    writeln!(out, "loop: first square over 10 is {found}^2")?;
    Ok(())
}

trait Shape {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;
}

struct Circle {
    radius: f64,
}

struct Rectangle {
    width: f64,
    height: f64,
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Clone, Copy, Debug)]
enum Weekday {
    Monday,
    Saturday,
    Sunday,
}

impl Weekday {
    fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

fn structs_traits_enums<W: Write>(out: &mut W) -> Result<()> {
    let shapes: [Box<dyn Shape>; 2] = [
        Box::new(Circle { radius: 1.0 }),
        Box::new(Rectangle {
            width: 2.0,
            height: 3.0,
        }),
    ];
    for shape in &shapes {
        writeln!(out, "{} area: {:.2}", shape.name(), shape.area())?;
    }

    for day in [Weekday::Monday, Weekday::Saturday, Weekday::Sunday] {
        writeln!(out, "{day} is weekend: {}", day.is_weekend())?;
    }
    Ok(())
}

fn error_handling<W: Write>(out: &mut W) -> Result<()> {
    let mut out = Scoped::acquire(out, |out: &mut &mut W| {
        if let Err(error) = writeln!(out, "Finally block executed") {
            log::warn!("could not write finalization line: {error}");
        }
    });

    match checked_divide(10, 0) {
        Ok(quotient) => writeln!(out, "10 / 0 = {quotient}")?,
        Err(error) => writeln!(out, "Caught error: {error}")?,
    }
    out.release();
    Ok(())
}

#[derive(Debug)]
struct Person {
    name: &'static str,
    age: u32,
}

fn closures<W: Write>(out: &mut W) -> Result<()> {
    let offset = 10;
    let add_offset = |n: i32| n + offset;
    writeln!(out, "closure: add_offset(5) = {}", add_offset(5))?;

    let squares_of_evens: Vec<i32> = (1..=10).filter(|n| n % 2 == 0).map(|n| n * n).collect();
    writeln!(out, "squares of evens: {squares_of_evens:?}")?;

    let people = [
        Person {
            name: "Alice",
            age: 30,
        },
        Person {
            name: "Bob",
            age: 17,
        },
        Person {
            name: "Carol",
            age: 45,
        },
    ];
    let mut adults: Vec<_> = people.iter().filter(|p| p.age >= 18).collect();
    adults.sort_by_key(|p| std::cmp::Reverse(p.age));
    let names: Vec<_> = adults.iter().map(|p| p.name).collect();
    writeln!(out, "adults, oldest first: {names:?}")?;

    let total_age: u32 = people.iter().map(|p| p.age).sum();
    writeln!(out, "total age: {total_age}")?;
    Ok(())
}

fn asynchronous<W: Write>(out: &mut W, duration: Duration) -> Result<()> {
    writeln!(out, "Waiting {}ms...", duration.as_millis())?;
    out.flush()?;
    delay::after(duration).block()?;
    writeln!(out, "Done waiting")?;
    Ok(())
}

fn events<W: Write>(out: &mut W) -> Result<()> {
    let (sender, receiver) = mpsc::channel();
    let mut publisher = Publisher::new();
    let listener = publisher.listen();

    let subscription = publisher.subscribe({
        let sender = sender.clone();
        move |_| {
            let _ = sender.send("Event received by first subscriber");
        }
    });
    publisher.subscribe(move |_| {
        let _ = sender.send("Event received by second subscriber");
    });

    let invoked = publisher.trigger();
    for line in receiver.try_iter() {
        writeln!(out, "{line}")?;
    }
    listener.wait();
    writeln!(out, "{invoked} callbacks invoked, listener woken")?;

    publisher.unsubscribe(subscription);
    let invoked = publisher.trigger();
    for line in receiver.try_iter() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "after unsubscribing: {invoked} callback invoked")?;
    Ok(())
}

#[derive(Debug)]
struct Pair<T> {
    first: T,
    second: T,
}

impl<T> Pair<T> {
    fn swap(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

fn largest<T: PartialOrd + Copy>(items: &[T]) -> Option<T> {
    let mut iter = items.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |max, item| if item > max { item } else { max }))
}

fn generics<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "largest i32: {:?}", largest(&[3, 9, 4]))?;
    writeln!(out, "largest char: {:?}", largest(&['x', 'b', 'q']))?;
    writeln!(out, "largest of nothing: {:?}", largest::<u8>(&[]))?;
    let pair = Pair {
        first: "left",
        second: "right",
    };
    writeln!(out, "swapped: {:?}", pair.swap())?;
    Ok(())
}

fn scoped_resources<W: Write>(out: &mut W) -> Result<()> {
    let (sender, receiver) = mpsc::channel();
    {
        let sender = sender.clone();
        let resource = Scoped::acquire("resource", move |name| {
            let _ = sender.send(format!("{name} released"));
        });
        writeln!(out, "using {}", *resource)?;
    }
    for line in receiver.try_iter() {
        writeln!(out, "scope exit: {line}")?;
    }

    let mut resource = Scoped::acquire("resource", move |name| {
        let _ = sender.send(format!("{name} released"));
    });
    let first = resource.release();
    let second = resource.release();
    drop(resource);
    for line in receiver.try_iter() {
        writeln!(out, "explicit release: {line}")?;
    }
    writeln!(out, "first release ran cleanup: {first}, second: {second}")?;
    Ok(())
}

fn lazy_sequences<W: Write>(out: &mut W) -> Result<()> {
    let sequence = Sequence::new(5);
    let mut line = String::new();
    for n in &sequence {
        line.push_str(&n.to_string());
        line.push(' ');
    }
    writeln!(out, "first traversal: {}", line.trim_end())?;
    writeln!(out, "second traversal: {:?}", sequence.iter().collect::<Vec<_>>())?;

    let streamed = futures_lite::future::block_on(sequence.stream().collect::<Vec<_>>());
    writeln!(out, "as a stream: {streamed:?}")?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{checked_divide, largest, Pair};
    use crate::Error;

    #[test]
    fn divide() {
        assert_eq!(checked_divide(10, 2).unwrap(), 5);
        assert!(matches!(
            checked_divide(10, 0),
            Err(Error::DivideByZero { dividend: 10 })
        ));
        assert_eq!(checked_divide(i32::MIN, -1).unwrap(), i32::MAX);
    }

    #[test]
    fn largest_of_slices() {
        assert_eq!(largest(&[1, 5, 2]), Some(5));
        assert_eq!(largest(&[2.5, -1.0]), Some(2.5));
        assert_eq!(largest::<i32>(&[]), None);
    }

    #[test]
    fn pair_swap() {
        let pair = Pair {
            first: 1,
            second: 2,
        }
        .swap();
        assert_eq!((pair.first, pair.second), (2, 1));
    }
}
