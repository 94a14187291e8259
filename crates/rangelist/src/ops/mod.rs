mod intersect;
mod inverse;
mod subtract;
mod union;
