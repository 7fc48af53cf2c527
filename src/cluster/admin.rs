use std::fmt;

use static_assertions::assert_obj_safe;

use crate::restore::{RestoreRequest, RestoreResponse};

/// A callback invoked with the outcome of a submitted request.
///
/// Listeners are invoked exactly once. The `Send` bound allows a service to deliver the outcome
/// from whatever thread the request completes on.
pub type Listener<T> = Box<dyn FnOnce(crate::Result<T>) + Send>;

/// A service which executes restore requests against a cluster.
///
/// This is the seam between request assembly and request execution: a [`RestoreRequestBuilder`]
/// only accumulates fields, and everything the builder deliberately doesn't check is checked
/// here. Implementations are expected to [`validate`] the request, resolve its index patterns,
/// apply its renames, and deliver the outcome to the listener exactly once. [`MemoryCluster`] is
/// an implementation backed by in-memory state.
///
/// [`RestoreRequestBuilder`]: crate::restore::RestoreRequestBuilder
/// [`validate`]: crate::restore::RestoreRequest::validate
/// [`MemoryCluster`]: crate::cluster::MemoryCluster
pub trait ClusterAdmin: fmt::Debug {
    /// Execute the given restore `request`, delivering the outcome to `listener`.
    ///
    /// Implementations perform the validation the builder defers and may reject the request with
    /// any of the errors documented on [`RestoreRequest::validate`], [`select_indices`], and
    /// [`rename_indices`], as well as failures of their own wrapped in [`Error::Cluster`].
    ///
    /// [`RestoreRequest::validate`]: crate::restore::RestoreRequest::validate
    /// [`select_indices`]: crate::restore::select_indices
    /// [`rename_indices`]: crate::restore::rename_indices
    /// [`Error::Cluster`]: crate::Error::Cluster
    fn restore(&mut self, request: RestoreRequest, listener: Listener<RestoreResponse>);
}

assert_obj_safe!(ClusterAdmin);

impl ClusterAdmin for Box<dyn ClusterAdmin> {
    fn restore(&mut self, request: RestoreRequest, listener: Listener<RestoreResponse>) {
        self.as_mut().restore(request, listener)
    }
}

/// A capability for submitting requests of type `R` to an admin service.
///
/// [`RequestBuilder`] is generic over this trait, so adding a new admin operation means defining
/// its request and response types and wiring them up with one `Submit` impl; the builder
/// machinery is shared. Every [`ClusterAdmin`] can accept [`RestoreRequest`]s through the blanket
/// impl.
///
/// [`RequestBuilder`]: crate::cluster::RequestBuilder
/// [`ClusterAdmin`]: crate::cluster::ClusterAdmin
/// [`RestoreRequest`]: crate::restore::RestoreRequest
pub trait Submit<R> {
    /// The response delivered when a submitted request completes.
    type Response;

    /// Hand the finished `request` to the service, delivering the outcome to `listener`.
    fn submit(&mut self, request: R, listener: Listener<Self::Response>);
}

impl<A: ClusterAdmin + ?Sized> Submit<RestoreRequest> for A {
    type Response = RestoreResponse;

    fn submit(&mut self, request: RestoreRequest, listener: Listener<RestoreResponse>) {
        self.restore(request, listener);
    }
}

/// A fluent accumulator for a request aimed at an admin service.
///
/// A `RequestBuilder` borrows the service it will submit to and owns the request it is
/// assembling. The methods on this type are shared by every request type; the setters specific to
/// one operation live on its alias, like [`RestoreRequestBuilder`].
///
/// [`RestoreRequestBuilder`]: crate::restore::RestoreRequestBuilder
#[derive(Debug)]
pub struct RequestBuilder<'a, A, R> {
    pub(crate) admin: &'a mut A,
    pub(crate) request: R,
}

impl<'a, A, R> RequestBuilder<'a, A, R> {
    /// Create a builder which will submit `request` to `admin`.
    pub fn from_request(admin: &'a mut A, request: R) -> Self {
        RequestBuilder { admin, request }
    }

    /// The request accumulated so far.
    pub fn request(&self) -> &R {
        &self.request
    }

    /// A mutable reference to the request accumulated so far.
    pub fn request_mut(&mut self) -> &mut R {
        &mut self.request
    }
}

impl<'a, A, R> RequestBuilder<'a, A, R>
where
    A: Submit<R>,
{
    /// Submit the accumulated request to the admin service.
    ///
    /// This consumes the builder and hands the request to the service exactly once; the service
    /// performs all deferred validation and delivers the outcome to `listener`. The builder
    /// itself never inspects the request here.
    pub fn execute<F>(self, listener: F)
    where
        F: FnOnce(crate::Result<A::Response>) + Send + 'static,
    {
        self.admin.submit(self.request, Box::new(listener));
    }
}
