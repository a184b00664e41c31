//! Props system for component properties.
//!
//! Props are an ordered map of [`PropValue`]s. Besides plain data they may
//! hold executable [`Callback`]s, opaque [`Handle`]s and element-valued
//! content; none of these three ever reach a payload.

use super::view::{ElementView, IntoView, View};
use indexmap::IndexMap;
use serde_json::{Number, Value};
use std::fmt;
use std::sync::Arc;

/// Type alias for callback functions carried in props.
pub type CallbackFn = Arc<dyn Fn(&[Value]) + Send + Sync + 'static>;

/// An executable prop value such as an event handler.
#[derive(Clone)]
pub struct Callback(CallbackFn);

impl Callback {
	/// Wraps a function.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&[Value]) + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	/// Invokes the callback.
	pub fn call(&self, args: &[Value]) {
		(self.0)(args)
	}
}

impl fmt::Debug for Callback {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Callback(..)")
	}
}

/// An opaque token, such as a ref, that has no serializable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle {
	label: String,
}

impl Handle {
	/// Creates a handle with a debugging label.
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
		}
	}

	/// Returns the debugging label.
	pub fn label(&self) -> &str {
		&self.label
	}
}

/// A single property value.
#[derive(Debug, Clone)]
pub enum PropValue {
	/// `null`.
	Null,
	/// A boolean.
	Bool(bool),
	/// A number.
	Number(Number),
	/// A string.
	String(String),
	/// An ordered list.
	List(Vec<PropValue>),
	/// A nested map, such as a style map.
	Map(IndexMap<String, PropValue>),
	/// An executable value.
	Callback(Callback),
	/// An opaque token.
	Handle(Handle),
	/// Element-valued content.
	View(Box<View>),
}

impl PropValue {
	/// Returns `true` for values that can never be serialized.
	pub fn is_executable(&self) -> bool {
		matches!(self, Self::Callback(_) | Self::Handle(_))
	}

	/// Returns the string if this is a string value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the boolean if this is a boolean value.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns the number as `i64` if it fits.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Number(n) => n.as_i64(),
			_ => None,
		}
	}
}

impl From<Value> for PropValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(b),
			Value::Number(n) => Self::Number(n),
			Value::String(s) => Self::String(s),
			Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
			Value::Object(map) => {
				Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
			}
		}
	}
}

impl From<bool> for PropValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<&str> for PropValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for PropValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

macro_rules! impl_from_integer {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for PropValue {
				fn from(value: $ty) -> Self {
					Self::Number(Number::from(value))
				}
			}
		)*
	};
}

impl_from_integer!(i32, i64, u32, u64, usize);

impl From<f64> for PropValue {
	fn from(value: f64) -> Self {
		Number::from_f64(value).map_or(Self::Null, Self::Number)
	}
}

impl From<Callback> for PropValue {
	fn from(value: Callback) -> Self {
		Self::Callback(value)
	}
}

impl From<Handle> for PropValue {
	fn from(value: Handle) -> Self {
		Self::Handle(value)
	}
}

impl From<View> for PropValue {
	fn from(value: View) -> Self {
		Self::View(Box::new(value))
	}
}

impl From<ElementView> for PropValue {
	fn from(value: ElementView) -> Self {
		Self::View(Box::new(value.into_view()))
	}
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
	fn from(value: Vec<T>) -> Self {
		Self::List(value.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

/// Ordered component or element properties.
///
/// ```
/// use islet_pages::component::{Props, View};
///
/// let props = Props::new()
/// 	.with("title", "Card")
/// 	.with("children", View::text("body"));
///
/// assert_eq!(props.get("title").and_then(|v| v.as_str()), Some("Card"));
/// assert_eq!(props.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Props(IndexMap<String, PropValue>);

impl Props {
	/// Creates empty props.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds props from a JSON object. Non-object values yield empty props.
	pub fn from_json(value: Value) -> Self {
		match value {
			Value::Object(map) => map
				.into_iter()
				.map(|(k, v)| (k, PropValue::from(v)))
				.collect(),
			_ => Self::new(),
		}
	}

	/// Adds a property, builder style.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Inserts a property, replacing any previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
		self.0.insert(key.into(), value.into());
	}

	/// Returns a property.
	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.0.get(key)
	}

	/// Removes a property, preserving the order of the rest.
	pub fn remove(&mut self, key: &str) -> Option<PropValue> {
		self.0.shift_remove(key)
	}

	/// Returns `true` if the key is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Iterates over properties in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &PropValue)> {
		self.0.iter()
	}

	/// Returns the number of properties.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if there are no properties.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<(String, PropValue)> for Props {
	fn from_iter<I: IntoIterator<Item = (String, PropValue)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for Props {
	type Item = (String, PropValue);
	type IntoIter = indexmap::map::IntoIter<String, PropValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	fn test_from_json_preserves_order_and_nesting() {
		let props = Props::from_json(json!({
			"b": 1,
			"a": {"color": "red"},
			"c": [true, null]
		}));

		let keys: Vec<_> = props.iter().map(|(k, _)| k.as_str()).collect();
		assert_eq!(keys, vec!["b", "a", "c"]);
		assert!(matches!(props.get("a"), Some(PropValue::Map(m)) if m.len() == 1));
		assert!(matches!(props.get("c"), Some(PropValue::List(l)) if l.len() == 2));
	}

	#[rstest]
	fn test_from_json_non_object_is_empty() {
		assert!(Props::from_json(json!([1, 2])).is_empty());
	}

	#[rstest]
	fn test_remove_keeps_remaining_order() {
		let mut props = Props::new().with("a", 1).with("b", 2).with("c", 3);

		props.remove("b");

		let keys: Vec<_> = props.iter().map(|(k, _)| k.as_str()).collect();
		assert_eq!(keys, vec!["a", "c"]);
	}

	#[rstest]
	fn test_callback_invokes_wrapped_function() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = calls.clone();
		let callback = Callback::new(move |_| {
			counter.fetch_add(1, Ordering::SeqCst);
		});

		callback.call(&[]);
		callback.call(&[json!(1)]);

		assert_eq!(calls.load(Ordering::SeqCst), 2);
		assert!(PropValue::from(callback).is_executable());
		assert!(PropValue::from(Handle::new("ref")).is_executable());
		assert!(!PropValue::from("text").is_executable());
	}
}
