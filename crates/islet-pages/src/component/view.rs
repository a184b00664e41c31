//! View tree: the input the serializer walks.

use super::definition::Component;
use super::props::{PropValue, Props};
use serde_json::Number;
use std::borrow::Cow;
use std::fmt;

/// A unified representation of renderable content.
///
/// `View` covers everything a component may return: host elements, text,
/// numbers, lists and fragments of further views, component instances, and
/// values outside the node model ([`View::Opaque`]) which the serializer
/// coerces to text.
#[derive(Debug, Clone)]
pub enum View {
	/// Renders nothing (null, undefined, booleans).
	Empty,
	/// Literal text.
	Text(Cow<'static, str>),
	/// A number, rendered in its JSON display form.
	Number(Number),
	/// A list of views, flattened into the surrounding sequence.
	List(Vec<View>),
	/// A fragment: children grouped without a wrapper element.
	Fragment(Vec<View>),
	/// A host element.
	Element(ElementView),
	/// A component instance.
	Component(ComponentView),
	/// A value outside the node model, carried by its display form.
	Opaque(String),
}

/// Represents a host element in the view tree.
#[derive(Debug, Clone)]
pub struct ElementView {
	tag: Cow<'static, str>,
	props: Props,
	children: Vec<View>,
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			props: Props::new(),
			children: Vec::new(),
		}
	}

	/// Sets a property.
	pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.props.insert(name, value);
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the properties.
	pub fn props(&self) -> &Props {
		&self.props
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Splits the element into tag, props and children.
	pub fn into_parts(self) -> (Cow<'static, str>, Props, Vec<View>) {
		(self.tag, self.props, self.children)
	}
}

/// A component paired with the props it is instantiated with.
#[derive(Debug, Clone)]
pub struct ComponentView {
	component: Component,
	props: Props,
}

impl ComponentView {
	/// Creates a component instance.
	pub fn new(component: Component, props: Props) -> Self {
		Self { component, props }
	}

	/// Returns the component.
	pub fn component(&self) -> &Component {
		&self.component
	}

	/// Returns the instantiation props.
	pub fn props(&self) -> &Props {
		&self.props
	}

	/// Splits the instance into component and props.
	pub fn into_parts(self) -> (Component, Props) {
		(self.component, self.props)
	}
}

impl View {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates a list view.
	pub fn list(items: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::List(items.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an opaque view from any displayable value.
	pub fn opaque(value: impl fmt::Display) -> Self {
		Self::Opaque(value.to_string())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns `true` for [`View::Empty`].
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}
}

/// Trait for types that can be converted into a View.
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl From<ElementView> for View {
	fn from(element: ElementView) -> Self {
		View::Element(element)
	}
}

impl IntoView for ComponentView {
	fn into_view(self) -> View {
		View::Component(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl IntoView for Cow<'static, str> {
	fn into_view(self) -> View {
		View::Text(self)
	}
}

impl IntoView for bool {
	fn into_view(self) -> View {
		View::Empty
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::List(self.into_iter().map(IntoView::into_view).collect())
	}
}

macro_rules! impl_into_view_for_integer {
	($($ty:ty),*) => {
		$(
			impl IntoView for $ty {
				fn into_view(self) -> View {
					View::Number(Number::from(self))
				}
			}
		)*
	};
}

impl_into_view_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoView for f64 {
	fn into_view(self) -> View {
		match Number::from_f64(self) {
			Some(number) => View::Number(number),
			None => View::Opaque(self.to_string()),
		}
	}
}

impl IntoView for f32 {
	fn into_view(self) -> View {
		f64::from(self).into_view()
	}
}
