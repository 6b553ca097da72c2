use headers::{Header, HeaderName, HeaderValue};
use shared_types::MemberId;

static X_ROLE: HeaderName = HeaderName::from_static("x-role");
static X_MEMBER_NO: HeaderName = HeaderName::from_static("x-member-no");

/// Role of the caller, as asserted by the gateway
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XRole(pub String);

/// Member number of the authenticated caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XMemberNo(pub MemberId);

fn single_value<'i>(
    values: &mut impl Iterator<Item = &'i HeaderValue>,
) -> Result<&'i str, headers::Error> {
    let value = values.next().ok_or_else(headers::Error::invalid)?;
    if values.next().is_some() {
        return Err(headers::Error::invalid());
    }

    value.to_str().map_err(|_| headers::Error::invalid())
}

impl Header for XRole {
    fn name() -> &'static HeaderName {
        &X_ROLE
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        single_value(values).map(|role| Self(role.to_owned()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}

impl Header for XMemberNo {
    fn name() -> &'static HeaderName {
        &X_MEMBER_NO
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        single_value(values)?
            .trim()
            .parse::<MemberId>()
            .map(Self)
            .map_err(|_| headers::Error::invalid())
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        values.extend(std::iter::once(HeaderValue::from(i64::from(self.0))));
    }
}
