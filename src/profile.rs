#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize, // primary rays, one per pixel
    pub bounce_rays: usize, // reflected and refracted rays
    pub shadow_rays: usize, // visibility tests toward lights
    pub deepest_bounce: usize,
}

impl Profile {
    pub fn new(
        camera_rays: usize,
        bounce_rays: usize,
        shadow_rays: usize,
        deepest_bounce: usize,
    ) -> Self {
        Profile {
            camera_rays,
            bounce_rays,
            shadow_rays,
            deepest_bounce,
        }
    }

    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.bounce_rays + other.bounce_rays,
            self.shadow_rays + other.shadow_rays,
            self.deepest_bounce.max(other.deepest_bounce),
        )
    }

    pub fn total_rays(&self) -> usize {
        self.camera_rays + self.bounce_rays + self.shadow_rays
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            bounce_rays,
            shadow_rays,
            deepest_bounce,
        } = self;
        let elapsed = elapsed.max(f32::EPSILON);
        let threads = threads.max(1) as f32;
        for (count, label) in [
            (camera_rays, "camera"),
            (bounce_rays, "bounce"),
            (shadow_rays, "shadow"),
            (self.total_rays(), "total"),
        ] {
            info!(
                "{} {} rays at {:.0} per second and {:.0} per second per thread",
                count,
                label,
                count as f32 / elapsed,
                count as f32 / elapsed / threads
            );
        }
        info!("deepest recursion level reached: {}", deepest_bounce);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let empty = Profile::default();
        assert_eq!(empty.total_rays(), 0);
        assert_eq!(empty.deepest_bounce, 0);
    }

    #[test]
    fn test_combine() {
        let a = Profile::new(1, 4, 8, 3);
        let b = Profile::new(1, 2, 5, 1);
        let c = a.combine(b);
        assert_eq!(c, Profile::new(2, 6, 13, 3));
        assert_eq!(c.total_rays(), 21);
        assert_eq!(Profile::default().combine(b), b);
    }
}
