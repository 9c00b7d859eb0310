//! # Fluent Helpers
//!
//! Turns any value into a chainable one: run side effects with [`Fluently::tap`]
//! or apply conditional transforms with [`Fluently::apply_if`], keeping the
//! value flowing through a single expression.
//!
//! ## Examples
//!
//! ```
//! use web_toolbelt_rs::fluent::Fluently;
//!
//! let list = Vec::new()
//!     .tap(|l| l.push("Hello"))
//!     .tap(|l| l.push(", "))
//!     .tap(|l| l.push("World!"));
//! assert_eq!(list.concat(), "Hello, World!");
//! ```

/// Extension trait adding fluent chaining to every sized type.
pub trait Fluently: Sized {
    /// Applies a side-effecting closure to the value and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use web_toolbelt_rs::fluent::Fluently;
    ///
    /// let numbers = vec![3, 1, 2].tap(|v| v.sort());
    /// assert_eq!(numbers, vec![1, 2, 3]);
    /// ```
    fn tap<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        action(&mut self);
        self
    }

    /// Applies the transform when the condition holds, otherwise returns the
    /// value unchanged. The transform is not invoked on a false condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use web_toolbelt_rs::fluent::Fluently;
    ///
    /// let greeting = String::from("hello")
    ///     .apply_if(true, |s| s + ", world")
    ///     .apply_if(false, |s| s + "!!!");
    /// assert_eq!(greeting, "hello, world");
    /// ```
    fn apply_if<F>(self, condition: bool, transform: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { transform(self) } else { self }
    }

    /// Like [`Fluently::apply_if`], but the predicate sees the current value.
    ///
    /// # Examples
    ///
    /// ```
    /// use web_toolbelt_rs::fluent::Fluently;
    ///
    /// let capped = vec![1, 2, 3]
    ///     .apply_if_with(|v| v.len() > 2, |mut v| { v.truncate(2); v });
    /// assert_eq!(capped, vec![1, 2]);
    /// ```
    fn apply_if_with<P, F>(self, predicate: P, transform: F) -> Self
    where
        P: FnOnce(&Self) -> bool,
        F: FnOnce(Self) -> Self,
    {
        if predicate(&self) { transform(self) } else { self }
    }
}

impl<T> Fluently for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_makes_method_fluent() {
        let list: Vec<&str> = Vec::new()
            .tap(|l| l.push("Hello"))
            .tap(|l| l.push(", "))
            .tap(|l| l.push("World!"));

        assert_eq!(list.concat(), "Hello, World!");
    }

    #[test]
    fn apply_if_with_uses_current_value_for_conditions() {
        let less_than_2 = |l: &Vec<&str>| l.len() < 2;
        let list = Vec::new()
            .apply_if_with(less_than_2, |l| l.tap(|l| l.push("One")))
            .apply_if_with(less_than_2, |l| l.tap(|l| l.push("Two")))
            .apply_if_with(less_than_2, |l| l.tap(|l| l.push("Three")));

        assert_eq!(list.len(), 2);
    }

    #[test]
    fn apply_if_skips_transform_when_condition_is_false() {
        let mut invoked = false;
        let value = 1.apply_if(false, |v| {
            invoked = true;
            v + 1
        });

        assert_eq!(value, 1);
        assert!(!invoked);
    }

    #[test]
    fn apply_if_allows_bool_conditions_from_values() {
        let value1: Option<&str> = None;
        let value2 = "";
        let value3 = "Hello";

        let list = Vec::new()
            .apply_if(value1.is_some(), |l: Vec<&str>| l.tap(|l| l.push(value1.unwrap_or(""))))
            .apply_if(!value2.is_empty(), |l| l.tap(|l| l.push(value2)))
            .apply_if(!value3.is_empty(), |l| l.tap(|l| l.push(value3)));

        assert_eq!(list.concat(), "Hello");
    }
}
