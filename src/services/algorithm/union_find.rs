//! 并查集（Disjoint Set Union）
//!
//! 路径压缩 + 按大小合并，Kruskal 算法每次调用新建一个实例

/// 并查集
#[derive(Debug, Clone)]
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// 查找代表元，沿途压缩路径
    pub(crate) fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// 按大小合并，较小的树挂到较大的树下；已在同一集合时返回 false
    pub(crate) fn union(&mut self, x: usize, y: usize) -> bool {
        let mut root_x = self.find(x);
        let mut root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        if self.size[root_x] < self.size[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parent[root_y] = root_x;
        self.size[root_x] += self.size[root_y];
        true
    }

    pub(crate) fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    #[cfg(test)]
    fn set_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
            assert_eq!(uf.set_size(i), 1);
        }
        assert!(!uf.connected(0, 1));
    }

    #[test]
    fn test_union_and_connected() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));

        assert!(uf.connected(0, 1));
        assert!(uf.connected(2, 3));
        assert!(!uf.connected(1, 2));

        assert!(uf.union(1, 3));
        assert!(uf.connected(0, 2));
        assert_eq!(uf.set_size(3), 4);
        assert!(!uf.connected(4, 0));
    }

    #[test]
    fn test_union_by_size_keeps_larger_root() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(0, 2);
        let big_root = uf.find(0);
        uf.union(3, 0);
        assert_eq!(uf.find(3), big_root);
    }

    #[test]
    fn test_path_compression() {
        let mut uf = UnionFind::new(6);
        for i in 0..5 {
            uf.union(i, i + 1);
        }
        let root = uf.find(5);
        for i in 0..6 {
            assert_eq!(uf.parent[i], root);
        }
    }
}
